//! The editable options snapshot and its defaults.

// self
use crate::{
	_prelude::*,
	auth::{AcrValue, Action, Prompt, ResponseMode, ResponseType, ScopeList},
	authorize::{encode, nonce},
	obs::{self, Operation, OperationSpan, Outcome},
	provider::{AcrValuesQuirk, Capabilities, ScopesQuirk, registry},
};

/// Identity service domain used when nothing else is configured.
pub const DEFAULT_DOMAIN: &str = "criipto-verify-prod.criipto.id";
/// Client identifier (also known as realm) used when nothing else is configured.
pub const DEFAULT_CLIENT_ID: &str = "urn:criipto:dev";
/// Redirect URI (also known as callback URL) used when nothing else is configured.
pub const DEFAULT_REDIRECT_URI: &str = "https://jwt.io";

/// Snapshot of every parameter the authorize URL is built from.
///
/// Hosts replace the snapshot on every edit; each `with_*`/`toggle_*` method consumes the old
/// value and returns the new one. `acr_values`, `available_scopes`, and `selected_scopes` are
/// only reachable through methods so that `selected_scopes ⊆ available_scopes` always holds and
/// `available_scopes` always reflects the current `acr_values`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorizationOptions {
	/// Identity service domain; the URL is `https://{domain}/oauth2/authorize`.
	pub domain: String,
	/// OAuth2 client identifier.
	pub client_id: String,
	/// Redirect URI registered for the client.
	pub redirect_uri: String,
	/// Requested response type.
	pub response_type: ResponseType,
	/// Requested response mode.
	pub response_mode: ResponseMode,
	acr_values: Vec<AcrValue>,
	/// Channel used for a single selected acr_value.
	pub acr_values_quirk: AcrValuesQuirk,
	/// OIDC nonce.
	pub nonce: String,
	/// Opaque state round-tripped to the redirect URI.
	pub state: Option<String>,
	/// Literal login hint supplied by the user.
	pub login_hint: Option<String>,
	/// ID token hint; only meaningful for acr_values that support it.
	pub id_token_hint: Option<String>,
	available_scopes: ScopeList,
	selected_scopes: ScopeList,
	/// Channel used for selected scopes.
	pub scopes_quirk: ScopesQuirk,
	/// OIDC prompt.
	pub prompt: Option<Prompt>,
	/// Login UI action verb; only sent when the selection supports it.
	pub action: Option<Action>,
	/// End-user message; only sent when the selection supports it.
	pub message: Option<String>,
}
impl AuthorizationOptions {
	/// Creates options seeded with the defaults and a freshly generated nonce.
	pub fn new() -> Self {
		Self {
			domain: DEFAULT_DOMAIN.into(),
			client_id: DEFAULT_CLIENT_ID.into(),
			redirect_uri: DEFAULT_REDIRECT_URI.into(),
			response_type: ResponseType::IdToken,
			response_mode: ResponseMode::Fragment,
			acr_values: Vec::new(),
			acr_values_quirk: AcrValuesQuirk::default(),
			nonce: nonce::generate_nonce(),
			state: None,
			login_hint: None,
			id_token_hint: None,
			available_scopes: ScopeList::default(),
			selected_scopes: ScopeList::default(),
			scopes_quirk: ScopesQuirk::default(),
			prompt: None,
			action: None,
			message: None,
		}
	}

	/// Selected acr_values in selection order.
	pub fn acr_values(&self) -> &[AcrValue] {
		&self.acr_values
	}

	/// Scopes every selected auth method can release.
	pub fn available_scopes(&self) -> &ScopeList {
		&self.available_scopes
	}

	/// Scopes the user picked, in selection order.
	pub fn selected_scopes(&self) -> &ScopeList {
		&self.selected_scopes
	}

	/// Capabilities of the current acr_values selection.
	pub fn capabilities(&self) -> Capabilities {
		Capabilities::derive(&self.acr_values)
	}

	/// Renders the authorization URL for this snapshot.
	pub fn build_url(&self) -> Result<Url> {
		encode::build_url(self)
	}

	/// Replaces the acr_values selection, dropping duplicates, and recomputes scopes.
	pub fn with_acr_values<I>(mut self, acr_values: I) -> Self
	where
		I: IntoIterator<Item = AcrValue>,
	{
		let mut deduped: Vec<AcrValue> = Vec::new();

		for acr in acr_values {
			if !deduped.contains(&acr) {
				deduped.push(acr);
			}
		}

		self.acr_values = deduped;
		self.recompute_scopes();

		self
	}

	/// Deselects `acr_value` when selected, otherwise appends it; then recomputes scopes.
	pub fn toggle_acr_value(mut self, acr_value: AcrValue) -> Self {
		if let Some(idx) = self.acr_values.iter().position(|acr| acr == &acr_value) {
			self.acr_values.remove(idx);
		} else {
			self.acr_values.push(acr_value);
		}

		self.recompute_scopes();

		self
	}

	/// Replaces the scope selection, keeping only currently available scopes.
	pub fn with_selected_scopes(mut self, scopes: &ScopeList) -> Self {
		self.selected_scopes = scopes.retain_within(&self.available_scopes);

		self
	}

	/// Deselects `scope` when selected, otherwise appends it.
	///
	/// Scopes outside [`available_scopes`](Self::available_scopes) are ignored.
	pub fn toggle_scope(mut self, scope: &str) -> Self {
		if self.available_scopes.contains(scope) {
			self.selected_scopes = self.selected_scopes.toggled(scope);
		}

		self
	}

	/// Sets the domain.
	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = domain.into();

		self
	}

	/// Sets the client identifier.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = client_id.into();

		self
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = redirect_uri.into();

		self
	}

	/// Sets the response type.
	pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
		self.response_type = response_type;

		self
	}

	/// Sets the response mode.
	pub fn with_response_mode(mut self, response_mode: ResponseMode) -> Self {
		self.response_mode = response_mode;

		self
	}

	/// Sets the acr_values quirk.
	pub fn with_acr_values_quirk(mut self, quirk: AcrValuesQuirk) -> Self {
		self.acr_values_quirk = quirk;

		self
	}

	/// Sets the scopes quirk.
	pub fn with_scopes_quirk(mut self, quirk: ScopesQuirk) -> Self {
		self.scopes_quirk = quirk;

		self
	}

	/// Overrides the generated nonce.
	pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = nonce.into();

		self
	}

	/// Sets the state.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Sets the literal login hint.
	pub fn with_login_hint(mut self, login_hint: impl Into<String>) -> Self {
		self.login_hint = Some(login_hint.into());

		self
	}

	/// Sets the ID token hint.
	pub fn with_id_token_hint(mut self, id_token_hint: impl Into<String>) -> Self {
		self.id_token_hint = Some(id_token_hint.into());

		self
	}

	/// Sets or clears the prompt.
	pub fn with_prompt(mut self, prompt: Option<Prompt>) -> Self {
		self.prompt = prompt;

		self
	}

	/// Sets or clears the action.
	pub fn with_action(mut self, action: Option<Action>) -> Self {
		self.action = action;

		self
	}

	/// Sets the end-user message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());

		self
	}

	fn recompute_scopes(&mut self) {
		let _guard = OperationSpan::new(Operation::RecomputeScopes, "recompute_scopes").entered();

		obs::record_outcome(Operation::RecomputeScopes, Outcome::Attempt);

		self.available_scopes = registry::available_scopes(&self.acr_values);
		self.selected_scopes = self.selected_scopes.retain_within(&self.available_scopes);

		obs::record_outcome(Operation::RecomputeScopes, Outcome::Success);
	}
}
impl Default for AuthorizationOptions {
	fn default() -> Self {
		Self::new()
	}
}
