//! Authorization URL builder for Nordic and European eID providers.
//!
//! Ships the acr_values registry, the capability tables, and the `login_hint` quirk encodings.
//!
//! The host (a web form, TUI, or CLI) owns an
//! [`AuthorizationOptions`](authorize::AuthorizationOptions) snapshot, replaces it on every edit,
//! and calls [`build_url`](authorize::build_url) to render the
//! resulting URL.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod authorize;
pub mod error;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
