//! Embedding presets supplied by the host page.

// self
use crate::{
	_prelude::*,
	auth::{AcrValue, ScopeList},
	authorize::AuthorizationOptions,
	error::ConfigError,
};

/// acr_value of the age verification service.
pub const AGE_VERIFICATION_ACR_VALUE: &str = "urn:age-verification";

/// Embedding configuration a host page supplies when mounting the builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderPreset {
	/// Pins the acr_values and hides the acr_values picker.
	pub acr_values: Option<Vec<AcrValue>>,
	/// Initial literal login hint.
	pub login_hint: Option<String>,
	/// Initial scope selection, filtered down to the available scopes.
	pub scope: Option<ScopeList>,
	/// Offers the acr_values/scopes quirk selectors when true.
	pub quirks: bool,
}
impl BuilderPreset {
	/// Parses a preset from JSON, reporting the failing path on error.
	pub fn from_json(raw: &str) -> Result<Self> {
		let deserializer = &mut serde_json::Deserializer::from_str(raw);
		let preset =
			serde_path_to_error::deserialize(deserializer).map_err(ConfigError::invalid_preset)?;

		Ok(preset)
	}

	/// Returns true if the preset pins acr_values.
	pub fn pins_acr_values(&self) -> bool {
		self.acr_values.is_some()
	}

	/// Returns true if every pinned acr_value is the age verification service.
	pub fn is_age_verification(&self) -> bool {
		self.acr_values
			.as_ref()
			.is_some_and(|values| values.iter().all(|acr| acr == AGE_VERIFICATION_ACR_VALUE))
	}
}
impl Default for BuilderPreset {
	fn default() -> Self {
		Self { acr_values: None, login_hint: None, scope: None, quirks: true }
	}
}

impl AuthorizationOptions {
	/// Creates default options and applies the preset's initial selections.
	pub fn from_preset(preset: &BuilderPreset) -> Self {
		let mut options = Self::new();

		if let Some(acr_values) = &preset.acr_values {
			options = options.with_acr_values(acr_values.iter().cloned());
		}
		if let Some(scope) = &preset.scope {
			options = options.with_selected_scopes(scope);
		}

		options.login_hint = preset.login_hint.clone();

		options
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn empty_json_yields_defaults() {
		let preset = BuilderPreset::from_json("{}").expect("Empty preset should parse.");

		assert_eq!(preset, BuilderPreset::default());
		assert!(preset.quirks);
		assert!(!preset.pins_acr_values());
	}

	#[test]
	fn full_preset_parses() {
		let preset = BuilderPreset::from_json(
			r#"{
				"acr_values": ["urn:grn:authn:no:bankid"],
				"login_hint": "sub:123",
				"scope": ["email"],
				"quirks": false
			}"#,
		)
		.expect("Full preset should parse.");

		assert!(preset.pins_acr_values());
		assert!(!preset.quirks);
		assert_eq!(preset.login_hint.as_deref(), Some("sub:123"));
		assert_eq!(preset.scope.map(|s| s.joined(" ")).as_deref(), Some("email"));
	}

	#[test]
	fn invalid_values_report_their_path() {
		let err = BuilderPreset::from_json(r#"{"acr_values":["urn:ok","has space"]}"#)
			.expect_err("Whitespace acr_value must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidPreset { ref path, .. }) if path == "acr_values[1]"
		));

		let err = BuilderPreset::from_json(r#"{"quirk":true}"#)
			.expect_err("Unknown keys must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidPreset { .. })));
	}

	#[test]
	fn age_verification_requires_every_pinned_value() {
		let age = BuilderPreset::from_json(r#"{"acr_values":["urn:age-verification"]}"#)
			.expect("Age verification preset should parse.");

		assert!(age.is_age_verification());

		let mixed = BuilderPreset::from_json(
			r#"{"acr_values":["urn:age-verification","urn:grn:authn:no:vipps"]}"#,
		)
		.expect("Mixed preset should parse.");

		assert!(!mixed.is_age_verification());
		assert!(!BuilderPreset::default().is_age_verification());
	}

	#[test]
	fn preset_scopes_are_filtered_through_acr_values() {
		let preset = BuilderPreset::from_json(
			r#"{
				"acr_values": ["urn:grn:authn:dk:mitid:low"],
				"scope": ["email", "ssn"],
				"login_hint": "sub:1"
			}"#,
		)
		.expect("Preset should parse.");
		let options = AuthorizationOptions::from_preset(&preset);

		assert_eq!(options.acr_values(), ["urn:grn:authn:dk:mitid:low"]);
		assert_eq!(options.selected_scopes().joined(" "), "ssn");
		assert_eq!(options.login_hint.as_deref(), Some("sub:1"));
	}
}
