//! Capability tables describing which acr_values accept optional parameters.

// self
use crate::{_prelude::*, auth::AcrValue};

/// acr_values whose login UI honours an `action:` token.
pub const ACTION_SUPPORTING_ACR_VALUES: &[&str] = &[
	"urn:grn:authn:dk:mitid:low",
	"urn:grn:authn:dk:mitid:substantial",
	"urn:grn:authn:dk:mitid:high",
	"urn:grn:authn:dk:mitid:business",
	"urn:grn:authn:se:bankid",
	"urn:grn:authn:se:bankid:same-device",
	"urn:grn:authn:se:bankid:another-device:qr",
];

/// acr_values whose app displays a `message:` token to the end user.
pub const MESSAGE_SUPPORTING_ACR_VALUES: &[&str] = &[
	"urn:grn:authn:dk:mitid:low",
	"urn:grn:authn:dk:mitid:substantial",
	"urn:grn:authn:dk:mitid:high",
	"urn:grn:authn:dk:mitid:business",
	"urn:grn:authn:se:bankid",
	"urn:grn:authn:se:bankid:same-device",
	"urn:grn:authn:se:bankid:another-device:qr",
];

/// acr_values that accept an `id_token_hint`.
pub const ID_TOKEN_HINT_SUPPORTING_ACR_VALUES: &[&str] = &["urn:age-verification"];

/// Optional parameters supported by the current acr_values selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
	/// `action:` tokens may be sent.
	pub action: bool,
	/// `message:` tokens may be sent.
	pub message: bool,
	/// `id_token_hint` may be offered.
	pub id_token_hint: bool,
}
impl Capabilities {
	/// Derives capabilities from the selected acr_values.
	///
	/// An empty selection enables `action` only. With several values, any capable value is
	/// enough for `action` and `message`; `id_token_hint` needs a single capable value.
	pub fn derive(acr_values: &[AcrValue]) -> Self {
		match acr_values {
			[] => Self { action: true, message: false, id_token_hint: false },
			[single] => Self {
				action: ACTION_SUPPORTING_ACR_VALUES.contains(&single.as_str()),
				message: MESSAGE_SUPPORTING_ACR_VALUES.contains(&single.as_str()),
				id_token_hint: ID_TOKEN_HINT_SUPPORTING_ACR_VALUES.contains(&single.as_str()),
			},
			many => Self {
				action: any_in(many, ACTION_SUPPORTING_ACR_VALUES),
				message: any_in(many, MESSAGE_SUPPORTING_ACR_VALUES),
				id_token_hint: false,
			},
		}
	}
}

fn any_in(acr_values: &[AcrValue], table: &[&str]) -> bool {
	acr_values.iter().any(|acr| table.contains(&acr.as_str()))
}
