// self
use crate::{_prelude::*, obs::Operation};

/// A span builder used by builder operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"eid_authorize_url.operation",
				operation = operation.as_str(),
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Enters the span for the remainder of the current scope.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}
}

/// RAII guard returned by [`OperationSpan::entered`].
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}

/// Logs a hosting-page query parameter that was present but not applied.
pub(crate) fn warn_ignored_seed(parameter: &'static str, value: &str) {
	#[cfg(feature = "tracing")]
	tracing::warn!(parameter, value, "Ignoring seed parameter.");
	#[cfg(not(feature = "tracing"))]
	let _ = (parameter, value);
}

/// Logs an acr_value that has no registry entry and therefore declares no scopes.
pub(crate) fn warn_unregistered_acr(acr_value: &str) {
	#[cfg(feature = "tracing")]
	tracing::warn!(acr_value, "acr_value is not registered; skipping it for scope availability.");
	#[cfg(not(feature = "tracing"))]
	let _ = acr_value;
}

/// Logs that the OS random source failed and the nonce fell back to a seeded generator.
pub(crate) fn warn_nonce_fallback(reason: &dyn Display) {
	#[cfg(feature = "tracing")]
	tracing::warn!(%reason, "OS random source unavailable; using fallback nonce.");
	#[cfg(not(feature = "tracing"))]
	let _ = reason;
}

/// Logs the shape of an assembled authorization URL.
pub(crate) fn debug_encoded(url: &Url) {
	#[cfg(feature = "tracing")]
	tracing::debug!(
		path = url.path(),
		query_len = url.query().map_or(0, str::len),
		"Assembled authorization URL."
	);
	#[cfg(not(feature = "tracing"))]
	let _ = url;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn operation_span_enters_with_or_without_tracing() {
		let _guard = OperationSpan::new(Operation::Encode, "test").entered();

		warn_ignored_seed("prompt", "select_account");
		warn_unregistered_acr("urn:unknown");
	}
}
