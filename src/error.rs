//! Crate-level error types shared by the encoder, presets, and seeding helpers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The domain is empty, so no authorization endpoint can be formed.
	#[error("Domain cannot be empty.")]
	EmptyDomain,
	/// The domain does not form a valid `https://{domain}/oauth2/authorize` URL.
	#[error("Domain `{domain}` does not form a valid authorization URL.")]
	InvalidDomain {
		/// Domain as supplied by the caller.
		domain: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Configuration failures raised while loading presets.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Preset JSON could not be parsed; the source carries the failing path.
	#[error("Preset is invalid at `{path}`.")]
	InvalidPreset {
		/// Dotted JSON path of the failing value.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ConfigError {
	/// Wraps a path-aware preset parsing failure.
	pub fn invalid_preset(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::InvalidPreset { path: source.path().to_string(), source }
	}
}
