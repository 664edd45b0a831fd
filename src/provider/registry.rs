//! Static eID provider registry.
//!
//! The table mirrors the providers listed on the documentation site, in display order. Each
//! auth method is addressed by its unique acr_value; declared scopes feed the scope picker.

// self
use crate::{
	_prelude::*,
	auth::{AcrValue, ScopeList},
	obs,
};

/// Single authentication method offered by a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AuthMethod {
	/// Display title.
	pub title: &'static str,
	/// Unique acr_value identifying the method.
	pub acr_value: &'static str,
	/// Scopes the method can release, in display order; empty when none are declared.
	pub scopes: &'static [&'static str],
}

/// eID provider with its documentation page and auth methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Provider {
	/// Display title.
	pub title: &'static str,
	/// Documentation page path.
	pub page: &'static str,
	/// Auth methods in display order.
	pub auth_methods: &'static [AuthMethod],
}

const DK_SCOPES: &[&str] = &["address", "ssn"];
const NO_BANKID_SCOPES: &[&str] = &["email", "phone", "address", "ssn"];
const NO_VIPPS_SCOPES: &[&str] = &["email", "phone", "address", "birthdate", "ssn"];

/// Every provider known to the builder, in display order.
pub static PROVIDERS: &[Provider] = &[
	Provider {
		title: "Finnish Trust Network",
		page: "/verify/eids/finnish-trust-network",
		auth_methods: &[
			AuthMethod { title: "BankID", acr_value: "urn:grn:authn:fi:bank-id", scopes: &[] },
			AuthMethod {
				title: "Mobile certificate (Mobiilivarmenne)",
				acr_value: "urn:grn:authn:fi:mobile-id",
				scopes: &[],
			},
			AuthMethod {
				title: "All (Both of the above)",
				acr_value: "urn:grn:authn:fi:all",
				scopes: &[],
			},
		],
	},
	Provider {
		title: "Danish NemID",
		page: "/verify/eids/danish-nemid",
		auth_methods: &[
			AuthMethod {
				title: "Personal with code card",
				acr_value: "urn:grn:authn:dk:nemid:poces",
				scopes: DK_SCOPES,
			},
			AuthMethod {
				title: "Employee with code card",
				acr_value: "urn:grn:authn:dk:nemid:moces",
				scopes: &[],
			},
			AuthMethod {
				title: "Employee with code file",
				acr_value: "urn:grn:authn:dk:nemid:moces:codefile",
				scopes: &[],
			},
		],
	},
	Provider {
		title: "Danish MitID",
		page: "/verify/eids/danish-mitid",
		auth_methods: &[
			AuthMethod { title: "Low", acr_value: "urn:grn:authn:dk:mitid:low", scopes: DK_SCOPES },
			AuthMethod {
				title: "Substantial",
				acr_value: "urn:grn:authn:dk:mitid:substantial",
				scopes: DK_SCOPES,
			},
		],
	},
	Provider {
		title: "Swedish BankID",
		page: "/verify/eids/swedish-bankid",
		auth_methods: &[
			AuthMethod {
				title: "Same device",
				acr_value: "urn:grn:authn:se:bankid:same-device",
				scopes: &[],
			},
			AuthMethod {
				title: "QR Code",
				acr_value: "urn:grn:authn:se:bankid:another-device:qr",
				scopes: &[],
			},
		],
	},
	Provider {
		title: "ItsME",
		page: "/verify/eids/itsme",
		auth_methods: &[
			AuthMethod { title: "Basic", acr_value: "urn:grn:authn:itsme:basic", scopes: &[] },
			AuthMethod {
				title: "Advanced",
				acr_value: "urn:grn:authn:itsme:advanced",
				scopes: &[],
			},
		],
	},
	Provider {
		title: "Norwegian BankID",
		page: "/verify/eids/norwegian-bankid",
		auth_methods: &[
			AuthMethod {
				title: "Norwegian BankID",
				acr_value: "urn:grn:authn:no:bankid",
				scopes: NO_BANKID_SCOPES,
			},
			AuthMethod {
				title: "Norwegian BankID Biometrics",
				acr_value: "urn:grn:authn:no:bankid:substantial",
				scopes: NO_BANKID_SCOPES,
			},
		],
	},
	Provider {
		title: "Norwegian Vipps",
		page: "/verify/eids/norwegian-vipps",
		auth_methods: &[AuthMethod {
			title: "Norwegian Vipps",
			acr_value: "urn:grn:authn:no:vipps",
			scopes: NO_VIPPS_SCOPES,
		}],
	},
	Provider {
		title: "Belgium",
		page: "/verify/eids/belgian-eid",
		auth_methods: &[AuthMethod {
			title: "Verified eID",
			acr_value: "urn:grn:authn:be:eid:verified",
			scopes: &[],
		}],
	},
	Provider {
		title: "Germany",
		page: "/verify/eids/sofort",
		auth_methods: &[AuthMethod {
			title: "Sofort (with Schufa check)",
			acr_value: "urn:grn:authn:de:sofort",
			scopes: &[],
		}],
	},
];

/// Returns the provider table.
pub fn providers() -> &'static [Provider] {
	PROVIDERS
}

/// Looks up the auth method registered for an acr_value.
pub fn find_auth_method(acr_value: &str) -> Option<&'static AuthMethod> {
	PROVIDERS.iter().flat_map(|p| p.auth_methods).find(|m| m.acr_value == acr_value)
}

/// Looks up the provider owning an acr_value.
pub fn find_provider(acr_value: &str) -> Option<&'static Provider> {
	PROVIDERS.iter().find(|p| p.auth_methods.iter().any(|m| m.acr_value == acr_value))
}

/// Intersects the scopes declared by every registered auth method in `acr_values`.
///
/// The result keeps the declaration order of the first registered method. An empty selection
/// yields an empty list, a registered method without declared scopes empties the intersection,
/// and unregistered acr_values are skipped.
pub fn available_scopes(acr_values: &[AcrValue]) -> ScopeList {
	let mut declared = acr_values.iter().filter_map(|acr| {
		let method = find_auth_method(acr);

		if method.is_none() {
			obs::warn_unregistered_acr(acr);
		}

		method.map(|m| m.scopes)
	});
	let Some(seed) = declared.next() else {
		return ScopeList::default();
	};
	let intersection = declared.fold(seed.to_vec(), |mut memo, scopes| {
		memo.retain(|scope| scopes.contains(scope));

		memo
	});

	ScopeList::from_static(&intersection)
}
