//! Seeding options from the hosting page's query string.

// self
use crate::{
	_prelude::*,
	auth::{AcrValue, Action, Prompt},
	authorize::AuthorizationOptions,
	obs::{self, Operation, OperationSpan, Outcome},
};

/// Overrides extracted from the hosting page's URL.
///
/// Only the first occurrence of each parameter counts. An empty `client_id`, `redirect_uri`, or
/// `message` clears the field. An empty `domain`, an acr_values list without a single valid entry,
/// and `action`/`prompt` values outside their enumerations are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSeed {
	/// Domain override.
	pub domain: Option<String>,
	/// Client identifier override.
	pub client_id: Option<String>,
	/// Redirect URI override.
	pub redirect_uri: Option<String>,
	/// acr_values override (space-delimited on the wire).
	pub acr_values: Option<Vec<AcrValue>>,
	/// Action override.
	pub action: Option<Action>,
	/// Message override.
	pub message: Option<String>,
	/// Prompt override.
	pub prompt: Option<Prompt>,
}
impl PageSeed {
	/// Extracts the seed parameters from a hosting page URL.
	pub fn from_page_url(page: &Url) -> Self {
		let first = |name: &'static str| {
			page.query_pairs().find(|(k, _)| k == name).map(|(_, v)| v.into_owned())
		};
		let acr_values = first("acr_values").and_then(|raw| {
			let parsed = AcrValue::parse_space_delimited(&raw);

			if parsed.is_empty() {
				obs::warn_ignored_seed("acr_values", &raw);

				None
			} else {
				Some(parsed)
			}
		});

		Self {
			domain: first("domain").and_then(|raw| non_empty("domain", raw)),
			client_id: first("client_id"),
			redirect_uri: first("redirect_uri"),
			acr_values,
			action: first("action").and_then(|raw| parse_enum("action", &raw)),
			message: first("message"),
			prompt: first("prompt").and_then(|raw| parse_enum("prompt", &raw)),
		}
	}

	/// Returns true if the seed overrides nothing.
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}

impl AuthorizationOptions {
	/// Applies the seed parameters found on the hosting page's URL.
	pub fn seed_from_page_url(self, page: &Url) -> Self {
		self.with_seed(PageSeed::from_page_url(page))
	}

	/// Applies a previously extracted seed; absent fields keep their current values.
	pub fn with_seed(self, seed: PageSeed) -> Self {
		let _guard = OperationSpan::new(Operation::Seed, "with_seed").entered();

		obs::record_outcome(Operation::Seed, Outcome::Attempt);

		let PageSeed { domain, client_id, redirect_uri, acr_values, action, message, prompt } =
			seed;
		let mut options = match acr_values {
			Some(acr_values) => self.with_acr_values(acr_values),
			None => self,
		};

		if let Some(domain) = domain {
			options.domain = domain;
		}
		if let Some(client_id) = client_id {
			options.client_id = client_id;
		}
		if let Some(redirect_uri) = redirect_uri {
			options.redirect_uri = redirect_uri;
		}
		if action.is_some() {
			options.action = action;
		}
		if message.is_some() {
			options.message = message;
		}
		if prompt.is_some() {
			options.prompt = prompt;
		}

		obs::record_outcome(Operation::Seed, Outcome::Success);

		options
	}
}

fn non_empty(name: &'static str, raw: String) -> Option<String> {
	if raw.is_empty() {
		obs::warn_ignored_seed(name, &raw);

		None
	} else {
		Some(raw)
	}
}

fn parse_enum<T>(name: &'static str, raw: &str) -> Option<T>
where
	T: FromStr,
{
	match raw.parse() {
		Ok(value) => Some(value),
		Err(_) => {
			obs::warn_ignored_seed(name, raw);

			None
		},
	}
}
