//! Ordered assembly of the authorization URL.

// std
use std::collections::VecDeque;
// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	authorize::AuthorizationOptions,
	obs::{self, Operation, OperationSpan, Outcome},
	provider::{AcrValuesQuirk, Capabilities, ScopesQuirk},
};

const AUTHORIZE_PATH: &str = "oauth2/authorize";
const BASE_SCOPE: &str = "openid";

/// Renders the authorization URL for `options`.
///
/// Capabilities are derived from the snapshot's acr_values; use [`build_url_with`] to supply
/// precomputed ones.
pub fn build_url(options: &AuthorizationOptions) -> Result<Url> {
	build_url_with(options, options.capabilities())
}

/// Renders the authorization URL for `options` using the provided capabilities.
///
/// Fails only when the domain is empty or does not form a valid URL host.
pub fn build_url_with(options: &AuthorizationOptions, capabilities: Capabilities) -> Result<Url> {
	let _guard = OperationSpan::new(Operation::Encode, "build_url").entered();

	obs::record_outcome(Operation::Encode, Outcome::Attempt);

	match assemble(options, capabilities) {
		Ok(url) => {
			obs::debug_encoded(&url);
			obs::record_outcome(Operation::Encode, Outcome::Success);

			Ok(url)
		},
		Err(e) => {
			obs::record_outcome(Operation::Encode, Outcome::Failure);

			Err(e)
		},
	}
}

fn assemble(options: &AuthorizationOptions, capabilities: Capabilities) -> Result<Url> {
	let mut url = authorize_endpoint(&options.domain)?;
	let mut query = QueryParams::default();

	query.set("scope", BASE_SCOPE);

	for (name, value) in scalar_params(options) {
		if let Some(value) = value.filter(|v| !v.is_empty()) {
			query.set(name, value);
		}
	}

	let mut login_hint = VecDeque::new();

	if let Some(hint) = non_empty(&options.login_hint) {
		login_hint.push_back(hint.to_owned());
	}

	match (options.acr_values(), options.acr_values_quirk) {
		([], _) => {},
		([acr], AcrValuesQuirk::LoginHint) => login_hint.push_front(format!("acr_values:{acr}")),
		([acr], AcrValuesQuirk::Path) =>
			url.set_path(&format!("/{}/{AUTHORIZE_PATH}", STANDARD.encode(acr.as_str()))),
		(acr_values, _) => query.set("acr_values", join(acr_values.iter().map(|a| a.as_str()))),
	}

	let scopes = options.selected_scopes();

	if !scopes.is_empty() {
		match options.scopes_quirk {
			ScopesQuirk::LoginHint =>
				login_hint.push_front(join(scopes.iter().map(|s| format!("scope:{s}")))),
			ScopesQuirk::None => query.set("scope", format!("{BASE_SCOPE} {}", scopes.joined(" "))),
		}
	}
	if let Some(action) = options.action.filter(|_| capabilities.action) {
		login_hint.push_back(format!("action:{action}"));
	}
	if let Some(message) = non_empty(&options.message).filter(|_| capabilities.message) {
		login_hint.push_back(format!("message:{}", STANDARD.encode(message)));
	}
	if !login_hint.is_empty() {
		query.set("login_hint", join(login_hint.iter()));
	}

	url.query_pairs_mut().clear().extend_pairs(query.pairs.iter().map(|(k, v)| (*k, v.as_str())));

	Ok(url)
}

fn authorize_endpoint(domain: &str) -> Result<Url> {
	if domain.is_empty() {
		return Err(Error::EmptyDomain);
	}

	Url::parse(&format!("https://{domain}/{AUTHORIZE_PATH}"))
		.map_err(|source| Error::InvalidDomain { domain: domain.to_owned(), source })
}

/// Scalar parameters copied verbatim when non-empty, in emission order.
fn scalar_params(options: &AuthorizationOptions) -> [(&'static str, Option<&str>); 8] {
	[
		("client_id", Some(options.client_id.as_str())),
		("redirect_uri", Some(options.redirect_uri.as_str())),
		("response_type", Some(options.response_type.as_str())),
		("response_mode", Some(options.response_mode.as_str())),
		("nonce", Some(options.nonce.as_str())),
		("state", options.state.as_deref()),
		("id_token_hint", options.id_token_hint.as_deref()),
		("prompt", options.prompt.map(|p| p.as_str())),
	]
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

fn join<I, S>(parts: I) -> String
where
	I: Iterator<Item = S>,
	S: AsRef<str>,
{
	let mut buf = String::new();

	for (idx, part) in parts.enumerate() {
		if idx > 0 {
			buf.push(' ');
		}

		buf.push_str(part.as_ref());
	}

	buf
}

/// Ordered query parameters where setting an existing name replaces its value in place.
#[derive(Debug, Default)]
struct QueryParams {
	pairs: Vec<(&'static str, String)>,
}
impl QueryParams {
	fn set(&mut self, name: &'static str, value: impl Into<String>) {
		let value = value.into();

		match self.pairs.iter_mut().find(|(k, _)| *k == name) {
			Some((_, slot)) => *slot = value,
			None => self.pairs.push((name, value)),
		}
	}
}
