//! Enumerated OAuth2/OIDC authorization parameters.

// self
use crate::_prelude::*;

macro_rules! def_param {
	(
		$name:ident, $doc:literal, $parameter:literal,
		[$($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?]
	) => {
		#[doc = $doc]
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(
				$(#[$vmeta])*
				#[serde(rename = $label)]
				$variant,
			)+
		}
		impl $name {
			/// Every value in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Returns the wire value of the parameter.
			pub const fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $label,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
		impl FromStr for $name {
			type Err = ParameterError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($label => Ok($name::$variant),)+
					_ => Err(ParameterError::Unknown {
						parameter: $parameter,
						value: s.to_owned(),
					}),
				}
			}
		}
	};
}

/// Error returned when a parameter value is outside its enumeration.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ParameterError {
	/// The value is not one of the accepted labels.
	#[error("Unknown {parameter} value `{value}`.")]
	Unknown {
		/// Parameter name.
		parameter: &'static str,
		/// Rejected value.
		value: String,
	},
}

def_param! {
	ResponseType, "OAuth2 `response_type` values offered by the builder.", "response_type", [
		/// Authorization code; enables PKCE and back-channel flows.
		Code => "code",
		/// Implicit ID token; deprecated but handy for debugging with a token viewer.
		IdToken => "id_token",
	]
}

def_param! {
	ResponseMode, "OAuth2 `response_mode` values offered by the builder.", "response_mode", [
		/// Return parameters in the redirect query string.
		Query => "query",
		/// Return parameters in the redirect fragment.
		Fragment => "fragment",
	]
}

def_param! {
	Prompt, "OIDC `prompt` values accepted by the identity service.", "prompt", [
		/// Force a login regardless of SSO state.
		Login => "login",
		/// Use an existing SSO session or fail.
		None => "none",
		/// Ask for consent.
		Consent => "consent",
		/// Revoke any existing SSN consent.
		ConsentRevoke => "consent_revoke",
	]
}
impl Prompt {
	/// Help text shown next to the prompt selector, if any.
	pub const fn description(self) -> Option<&'static str> {
		match self {
			Prompt::Login => Some("`prompt=login` will force a login regardless of SSO state."),
			Prompt::None =>
				Some("`prompt=none` will use existing SSO session or fail with `login_required`."),
			Prompt::ConsentRevoke =>
				Some("`prompt=consent_revoke` will revoke any existing SSN consent."),
			Prompt::Consent => None,
		}
	}
}

def_param! {
	Action, "Action verbs smuggled through `login_hint` to relabel the login UI.", "action", [
		/// Log in.
		Login => "login",
		/// Confirm.
		Confirm => "confirm",
		/// Accept.
		Accept => "accept",
		/// Approve.
		Approve => "approve",
		/// Sign.
		Sign => "sign",
	]
}
