//! Optional observability helpers for builder operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `eid_authorize_url.operation` with
//!   the `operation` and `stage` (call site) fields, plus warnings for ignored inputs.
//! - Enable `metrics` to increment the `eid_authorize_url_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Builder operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Seeding options from a hosting page URL.
	Seed,
	/// Recomputing available scopes after an acr_values change.
	RecomputeScopes,
	/// Assembling the authorization URL.
	Encode,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Seed => "seed",
			Operation::RecomputeScopes => "recompute_scopes",
			Operation::Encode => "encode",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a builder helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
