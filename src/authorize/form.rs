//! Host-form derivation: which inputs to offer and which advisories to show.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	authorize::{AuthorizationOptions, BuilderPreset},
};

/// Countries offered by the age verification login hint selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
	/// Denmark.
	#[serde(rename = "DK")]
	Dk,
	/// Sweden.
	#[serde(rename = "SE")]
	Se,
	/// Norway.
	#[serde(rename = "NO")]
	No,
	/// Finland.
	#[serde(rename = "FI")]
	Fi,
}
impl Country {
	/// Every selectable country in display order.
	pub const ALL: &'static [Country] = &[Country::Dk, Country::Se, Country::No, Country::Fi];

	/// ISO 3166-1 alpha-2 code.
	pub const fn code(self) -> &'static str {
		match self {
			Country::Dk => "DK",
			Country::Se => "SE",
			Country::No => "NO",
			Country::Fi => "FI",
		}
	}

	/// `login_hint` value selecting this country.
	pub fn login_hint(self) -> String {
		format!("country:{}", self.code())
	}
}
impl Display for Country {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.code())
	}
}

/// Input used for the login hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginHintInput {
	/// Free-text input.
	Text,
	/// [`Country`] selector for age verification.
	CountrySelector,
}

/// Optional inputs a host form should show for the current options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OfferedFields {
	/// `id_token_hint` input.
	pub id_token_hint: bool,
	/// Kind of login hint input.
	pub login_hint: LoginHintInput,
	/// acr_values picker.
	pub acr_values: bool,
	/// Scope picker.
	pub scopes: bool,
	/// Scopes quirk selector.
	pub scopes_quirk: bool,
	/// acr_values quirk selector.
	pub acr_values_quirk: bool,
	/// Action selector.
	pub action: bool,
	/// Message input.
	pub message: bool,
}
impl OfferedFields {
	/// Derives the offered inputs from the current options and the embedding preset.
	pub fn derive(options: &AuthorizationOptions, preset: &BuilderPreset) -> Self {
		let caps = options.capabilities();
		let has_scopes = !options.available_scopes().is_empty();

		Self {
			id_token_hint: caps.id_token_hint,
			login_hint: if preset.is_age_verification() {
				LoginHintInput::CountrySelector
			} else {
				LoginHintInput::Text
			},
			acr_values: !preset.pins_acr_values(),
			scopes: has_scopes,
			scopes_quirk: preset.quirks && has_scopes,
			acr_values_quirk: preset.quirks && options.acr_values().len() == 1,
			action: caps.action,
			message: caps.message,
		}
	}
}

/// Provider-imposed limits on the `message` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLimit {
	/// MitID: 130 characters before base64 encoding.
	MitId,
	/// Swedish BankID: 1500 characters after base64 encoding.
	SeBankId,
}
impl MessageLimit {
	/// Maximum allowed length.
	pub const fn max_len(self) -> usize {
		match self {
			MessageLimit::MitId => 130,
			MessageLimit::SeBankId => 1500,
		}
	}

	fn applies_to(self, acr_value: &str) -> bool {
		match self {
			MessageLimit::MitId => acr_value.starts_with("urn:grn:authn:dk:mitid"),
			MessageLimit::SeBankId => acr_value.starts_with("urn:grn:authn:se:bankid"),
		}
	}

	fn measure(self, message: &str) -> usize {
		match self {
			MessageLimit::MitId => message.chars().count(),
			MessageLimit::SeBankId => STANDARD.encode(message).len(),
		}
	}
}

/// Message exceeding a provider limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MessageLimitViolation {
	/// Limit that was exceeded.
	pub limit: MessageLimit,
	/// Measured length.
	pub len: usize,
}

/// Reports provider message limits exceeded by the current message.
///
/// Advisory only; encoding still sends the message. Nothing is reported when the selection does
/// not support messages.
pub fn check_message_limits(options: &AuthorizationOptions) -> Vec<MessageLimitViolation> {
	let Some(message) = options.message.as_deref().filter(|m| !m.is_empty()) else {
		return Vec::new();
	};

	if !options.capabilities().message {
		return Vec::new();
	}

	[MessageLimit::MitId, MessageLimit::SeBankId]
		.into_iter()
		.filter(|limit| options.acr_values().iter().any(|acr| limit.applies_to(acr)))
		.map(|limit| MessageLimitViolation { limit, len: limit.measure(message) })
		.filter(|violation| violation.len > violation.limit.max_len())
		.collect()
}

impl AuthorizationOptions {
	/// Sets the login hint to the age verification country selector value.
	pub fn with_country(self, country: Country) -> Self {
		self.with_login_hint(country.login_hint())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::AcrValue;

	fn acr(value: &str) -> AcrValue {
		AcrValue::new(value).expect("Form fixture acr_value should be valid.")
	}

	#[test]
	fn unpinned_preset_offers_acr_picker_and_action() {
		let fields = OfferedFields::derive(&AuthorizationOptions::new(), &BuilderPreset::default());

		assert!(fields.acr_values);
		assert!(fields.action);
		assert!(!fields.message && !fields.id_token_hint && !fields.scopes);
		assert!(!fields.acr_values_quirk && !fields.scopes_quirk);
		assert_eq!(fields.login_hint, LoginHintInput::Text);
	}

	#[test]
	fn single_scoped_selection_offers_quirks_unless_disabled() {
		let options = AuthorizationOptions::new().with_acr_values([acr("urn:grn:authn:no:bankid")]);
		let fields = OfferedFields::derive(&options, &BuilderPreset::default());

		assert!(fields.scopes && fields.scopes_quirk && fields.acr_values_quirk);

		let preset = BuilderPreset { quirks: false, ..BuilderPreset::default() };
		let fields = OfferedFields::derive(&options, &preset);

		assert!(fields.scopes && !fields.scopes_quirk && !fields.acr_values_quirk);
	}

	#[test]
	fn age_verification_preset_offers_country_and_id_token_hint() {
		let preset = BuilderPreset {
			acr_values: Some(vec![acr("urn:age-verification")]),
			..BuilderPreset::default()
		};
		let options = AuthorizationOptions::from_preset(&preset).with_country(Country::Se);
		let fields = OfferedFields::derive(&options, &preset);

		assert_eq!(fields.login_hint, LoginHintInput::CountrySelector);
		assert!(fields.id_token_hint);
		assert!(!fields.acr_values);
		assert_eq!(options.login_hint.as_deref(), Some("country:SE"));
	}

	#[test]
	fn mitid_limit_counts_characters_before_encoding() {
		let options = AuthorizationOptions::new()
			.with_acr_values([acr("urn:grn:authn:dk:mitid:low")])
			.with_message("å".repeat(131));

		assert_eq!(
			check_message_limits(&options),
			vec![MessageLimitViolation { limit: MessageLimit::MitId, len: 131 }]
		);
		assert!(check_message_limits(&options.with_message("å".repeat(130))).is_empty());
	}

	#[test]
	fn bankid_limit_counts_encoded_length() {
		let options = AuthorizationOptions::new()
			.with_acr_values([acr("urn:grn:authn:se:bankid:same-device")])
			.with_message("a".repeat(1125));

		assert!(check_message_limits(&options).is_empty(), "1125 bytes encode to 1500.");

		let options = options.with_message("a".repeat(1126));

		assert_eq!(
			check_message_limits(&options),
			vec![MessageLimitViolation { limit: MessageLimit::SeBankId, len: 1504 }]
		);
	}

	#[test]
	fn limits_are_skipped_when_messages_are_unsupported() {
		let options = AuthorizationOptions::new()
			.with_acr_values([acr("urn:grn:authn:no:vipps")])
			.with_message("x".repeat(5000));

		assert!(check_message_limits(&options).is_empty());
	}
}
