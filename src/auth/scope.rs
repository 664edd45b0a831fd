//! Ordered scope lists used for availability and selection tracking.

// self
use crate::_prelude::*;

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// Empty scope entries are not allowed.
	#[error("Scope entries cannot be empty.")]
	Empty,
	/// Scopes cannot contain embedded whitespace characters.
	#[error("Scope contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
}

/// Ordered, duplicate-free list of scope names.
///
/// Order is significant: available scopes follow the declaration order of the first selected
/// auth method, selections follow the order in which they were made, and the rendered URL lists
/// scopes in that same order.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Creates a scope list from any iterator, keeping the first occurrence of duplicates.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list = Self::default();

		for scope in scopes {
			let scope = scope.into();

			if scope.is_empty() {
				return Err(ScopeValidationError::Empty);
			}
			if scope.chars().any(char::is_whitespace) {
				return Err(ScopeValidationError::ContainsWhitespace { scope });
			}

			list.push_unique(scope);
		}

		Ok(list)
	}

	/// Builds a list from trusted static declarations.
	pub(crate) fn from_static(scopes: &[&'static str]) -> Self {
		let mut list = Self::default();

		scopes.iter().for_each(|scope| list.push_unique((*scope).to_owned()));

		list
	}

	/// Number of scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no scopes are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the list contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over scopes in list order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Joins scopes with the provided delimiter.
	pub fn joined(&self, delimiter: &str) -> String {
		self.0.join(delimiter)
	}

	/// Keeps only the scopes also present in `other`, preserving this list's order.
	pub fn retain_within(&self, other: &ScopeList) -> Self {
		Self(self.0.iter().filter(|scope| other.contains(scope)).cloned().collect())
	}

	/// Returns a new list with `scope` removed when present or appended when absent.
	pub fn toggled(&self, scope: &str) -> Self {
		let mut next = self.clone();

		match next.0.iter().position(|candidate| candidate == scope) {
			Some(idx) => {
				next.0.remove(idx);
			},
			None => next.0.push(scope.to_owned()),
		}

		next
	}

	fn push_unique(&mut self, scope: String) {
		if !self.0.contains(&scope) {
			self.0.push(scope);
		}
	}
}
impl Debug for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeList").field(&self.0).finish()
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined(" "))
	}
}
impl TryFrom<Vec<String>> for ScopeList {
	type Error = ScopeValidationError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ScopeList> for Vec<String> {
	fn from(value: ScopeList) -> Self {
		value.0
	}
}
impl FromStr for ScopeList {
	type Err = ScopeValidationError;

	/// Parses a space-delimited scope string; the empty string is the empty list.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"" => Ok(Self::default()),
			s if s.trim().is_empty() => Err(ScopeValidationError::Empty),
			s => Self::new(s.split_whitespace()),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_keep_insertion_order_and_drop_duplicates() {
		let scopes = ScopeList::new(["ssn", "address", "ssn"])
			.expect("Scope list with duplicates should be valid.");

		assert_eq!(scopes.iter().collect::<Vec<_>>(), vec!["ssn", "address"]);
		assert_eq!(scopes.to_string(), "ssn address");
	}

	#[test]
	fn scopes_reject_whitespace_padding() {
		assert!(matches!(
			ScopeList::new([" email "]),
			Err(ScopeValidationError::ContainsWhitespace { .. })
		));
		assert_eq!(ScopeList::new([""]), Err(ScopeValidationError::Empty));
		assert_eq!("".parse::<ScopeList>(), Ok(ScopeList::default()));
		assert_eq!("   ".parse::<ScopeList>(), Err(ScopeValidationError::Empty));
	}

	#[test]
	fn retain_within_preserves_receiver_order() {
		let selected: ScopeList =
			"phone ssn email".parse().expect("Scope string should parse successfully.");
		let kept = selected.retain_within(&ScopeList::from_static(&["email", "phone", "address"]));

		assert_eq!(kept.joined(","), "phone,email");
	}

	#[test]
	fn toggled_appends_then_removes() {
		let scopes = ScopeList::default().toggled("email").toggled("phone");

		assert_eq!(scopes.joined(" "), "email phone");

		let scopes = scopes.toggled("email");

		assert_eq!(scopes.joined(" "), "phone");
		assert!(!scopes.contains("email"));
	}

	#[test]
	fn serde_uses_a_plain_sequence() {
		let scopes: ScopeList =
			serde_json::from_str(r#"["email","phone","email"]"#).expect("Scope JSON should parse.");

		assert_eq!(scopes.len(), 2);
		assert_eq!(
			serde_json::to_string(&scopes).expect("Scope list should serialize."),
			r#"["email","phone"]"#
		);
		assert!(serde_json::from_str::<ScopeList>(r#"[""]"#).is_err());
	}
}
