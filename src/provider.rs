//! eID provider data: the auth-method registry, capability tables, and encoding quirks.
//!
//! `registry` exposes the static provider table (titles, documentation pages, acr_values, and
//! declared scopes). `capability` derives which optional parameters a given acr_values selection
//! supports. `quirks` names the non-standard channels some integrations need for acr_values and
//! scopes.

pub mod capability;
pub mod quirks;
pub mod registry;

pub use capability::*;
pub use quirks::*;
pub use registry::*;
