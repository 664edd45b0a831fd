//! Authorization URL assembly: the options snapshot, seeding, presets, and the encoder.
//!
//! Hosts own an [`AuthorizationOptions`] value, replace it on every edit, and call
//! [`build_url`] to render the current URL. Changing acr_values always recomputes the available
//! scopes before the next render, so the encoder only ever sees consistent snapshots.

pub mod encode;
pub mod form;
pub mod nonce;
pub mod options;
pub mod preset;
pub mod seed;

pub use encode::*;
pub use form::*;
pub use nonce::*;
pub use options::*;
pub use preset::*;
pub use seed::*;
