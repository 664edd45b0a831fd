//! Auth-domain identifiers, scope lists, and OIDC parameter enumerations.

pub mod acr;
pub mod param;
pub mod scope;

pub use acr::*;
pub use param::*;
pub use scope::*;
