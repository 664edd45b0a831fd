//! Walks a host through seeding, editing, and rendering an authorization URL.
//!
//! ```sh
//! cargo run --example build_authorize_url -- "<hosting page URL>"
//! ```

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use eid_authorize_url::{
	auth::Action,
	authorize::{AuthorizationOptions, BuilderPreset, OfferedFields, check_message_limits},
	provider::{self, ScopesQuirk},
	url::Url,
};

const DEFAULT_PAGE: &str =
	"https://docs.example.com/builder?acr_values=urn%3Agrn%3Aauthn%3Ano%3Abankid";

fn main() -> Result<()> {
	color_eyre::install()?;

	let page = env::args().nth(1).unwrap_or_else(|| DEFAULT_PAGE.into());
	let page = Url::parse(&page)?;
	let preset = BuilderPreset::from_json(r#"{"scope":["email"]}"#)?;
	let mut options = AuthorizationOptions::from_preset(&preset).seed_from_page_url(&page);

	println!("Providers:");

	for p in provider::providers() {
		let methods = p.auth_methods.iter().map(|m| m.acr_value).collect::<Vec<_>>();

		println!("  {} ({})", p.title, methods.join(", "));
	}

	println!("Available scopes: {}", options.available_scopes());
	println!("Offered fields: {:?}", OfferedFields::derive(&options, &preset));
	println!("Initial URL: {}", options.build_url()?);

	options = options
		.toggle_scope("email")
		.toggle_scope("phone")
		.with_scopes_quirk(ScopesQuirk::LoginHint)
		.with_action(Some(Action::Sign))
		.with_message("Please confirm the login.");

	for violation in check_message_limits(&options) {
		println!("Message too long for {:?}: {} characters.", violation.limit, violation.len);
	}

	println!("Edited URL: {}", options.build_url()?);

	Ok(())
}
