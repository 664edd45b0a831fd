//! Non-standard channels for acr_values and scopes.

// self
use crate::_prelude::*;

/// How `acr_values` are transmitted when exactly one value is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcrValuesQuirk {
	/// Standard `acr_values` query parameter.
	#[default]
	None,
	/// Smuggled as an `acr_values:{value}` token inside `login_hint`.
	LoginHint,
	/// Base64-encoded into the first path segment of the authorize endpoint.
	Path,
}
impl AcrValuesQuirk {
	/// Returns a stable label suitable for selectors and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AcrValuesQuirk::None => "none",
			AcrValuesQuirk::LoginHint => "login_hint",
			AcrValuesQuirk::Path => "path",
		}
	}
}
impl Display for AcrValuesQuirk {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How selected scopes are transmitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopesQuirk {
	/// Standard `scope` query parameter (`openid` plus the selection).
	#[default]
	None,
	/// Smuggled as `scope:{name}` tokens inside `login_hint`.
	LoginHint,
}
impl ScopesQuirk {
	/// Returns a stable label suitable for selectors and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ScopesQuirk::None => "none",
			ScopesQuirk::LoginHint => "login_hint",
		}
	}
}
impl Display for ScopesQuirk {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
