//! Authentication context class references.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Longest acr_value accepted, in bytes.
pub const ACR_VALUE_MAX_LEN: usize = 128;

/// Error returned when an acr_value fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The acr_value was empty.
	#[error("acr_value cannot be empty.")]
	Empty,
	/// The acr_value contains whitespace, which would split it on the wire.
	#[error("acr_value contains whitespace: {value}.")]
	ContainsWhitespace {
		/// Offending input.
		value: String,
	},
	/// The acr_value is longer than [`ACR_VALUE_MAX_LEN`].
	#[error("acr_value exceeds {max} bytes.")]
	TooLong {
		/// Maximum permitted length.
		max: usize,
	},
}

/// Authentication context class reference naming a single eID method.
///
/// Registered values look like `urn:grn:authn:dk:mitid:low`; unregistered values are still
/// representable so that seeded or preset selections survive a registry miss.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AcrValue(String);
impl AcrValue {
	/// Validates and wraps an acr_value.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let value = value.as_ref();

		check(value)?;

		Ok(Self(value.to_owned()))
	}

	/// Parses a space-delimited `acr_values` string.
	///
	/// Empty and invalid entries are skipped; repeated entries keep their first position.
	pub fn parse_space_delimited(raw: &str) -> Vec<AcrValue> {
		let mut values = Vec::new();

		for acr in raw.split(' ').filter_map(|part| AcrValue::new(part).ok()) {
			if !values.contains(&acr) {
				values.push(acr);
			}
		}

		values
	}

	/// Borrows the raw value.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for AcrValue {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for AcrValue {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl PartialEq<str> for AcrValue {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}
impl PartialEq<&str> for AcrValue {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
impl TryFrom<String> for AcrValue {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		check(&value)?;

		Ok(Self(value))
	}
}
impl From<AcrValue> for String {
	fn from(value: AcrValue) -> Self {
		value.0
	}
}
impl FromStr for AcrValue {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for AcrValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "AcrValue({})", self.0)
	}
}
impl Display for AcrValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn check(value: &str) -> Result<(), IdentifierError> {
	if value.is_empty() {
		Err(IdentifierError::Empty)
	} else if value.chars().any(char::is_whitespace) {
		Err(IdentifierError::ContainsWhitespace { value: value.to_owned() })
	} else if value.len() > ACR_VALUE_MAX_LEN {
		Err(IdentifierError::TooLong { max: ACR_VALUE_MAX_LEN })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::BTreeSet;
	// self
	use super::*;

	#[test]
	fn whitespace_and_empty_values_are_rejected() {
		assert_eq!(AcrValue::new(""), Err(IdentifierError::Empty));
		assert!(matches!(
			AcrValue::new("urn:grn:authn:no:bankid "),
			Err(IdentifierError::ContainsWhitespace { .. })
		));

		let acr: AcrValue =
			"urn:grn:authn:no:bankid".parse().expect("Norwegian BankID acr_value should be valid.");

		assert_eq!(acr, "urn:grn:authn:no:bankid");
		assert_eq!(format!("{acr:?}"), "AcrValue(urn:grn:authn:no:bankid)");
	}

	#[test]
	fn deserialization_validates() {
		let acr: AcrValue = serde_json::from_str("\"urn:grn:authn:dk:mitid:low\"")
			.expect("acr_value should deserialize successfully.");

		assert_eq!(acr.as_str(), "urn:grn:authn:dk:mitid:low");
		assert!(serde_json::from_str::<AcrValue>("\"with space\"").is_err());
	}

	#[test]
	fn length_limit_is_enforced() {
		assert!(AcrValue::new("a".repeat(ACR_VALUE_MAX_LEN)).is_ok());
		assert_eq!(
			AcrValue::new("a".repeat(ACR_VALUE_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { max: ACR_VALUE_MAX_LEN })
		);
	}

	#[test]
	fn space_delimited_parsing_skips_blanks_and_duplicates() {
		let values = AcrValue::parse_space_delimited(
			"urn:grn:authn:dk:mitid:low  urn:grn:authn:se:bankid urn:grn:authn:dk:mitid:low",
		);

		assert_eq!(values, vec!["urn:grn:authn:dk:mitid:low", "urn:grn:authn:se:bankid"]);
		assert!(AcrValue::parse_space_delimited("").is_empty());
	}

	#[test]
	fn borrowed_lookup_works_in_sets() {
		let set = BTreeSet::from([AcrValue::new("urn:age-verification")
			.expect("Lookup acr_value should be valid.")]);

		assert!(set.contains("urn:age-verification"));
	}
}
