//! Nonce generation.

// std
use std::time::{SystemTime, UNIX_EPOCH};
// crates.io
use rand::{
	Rng, SeedableRng, TryRngCore,
	rngs::{OsRng, StdRng},
};
use uuid::Builder as UuidBuilder;
// self
use crate::{_prelude::*, obs};

/// Prefix carried by every generated nonce.
pub const NONCE_PREFIX: &str = "ecnon-";

const FALLBACK_CHUNKS: usize = 3;
const FALLBACK_CHUNK_LEN: usize = 11;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a default nonce: `ecnon-` followed by a random UUID.
///
/// The UUID is drawn from the OS CSPRNG. When that source fails, the token degrades to base-36
/// chunks from a clock-seeded generator.
pub fn generate_nonce() -> String {
	nonce_from(|bytes| OsRng.try_fill_bytes(bytes))
}

fn nonce_from<F, E>(fill: F) -> String
where
	F: FnOnce(&mut [u8; 16]) -> Result<(), E>,
	E: Display,
{
	let mut bytes = [0_u8; 16];
	let token = match fill(&mut bytes) {
		Ok(()) => UuidBuilder::from_random_bytes(bytes).into_uuid().to_string(),
		Err(e) => {
			obs::warn_nonce_fallback(&e);

			fallback_token(&mut StdRng::seed_from_u64(clock_seed()))
		},
	};

	format!("{NONCE_PREFIX}{token}")
}

fn fallback_token<R>(rng: &mut R) -> String
where
	R: Rng,
{
	(0..FALLBACK_CHUNKS * FALLBACK_CHUNK_LEN)
		.map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
		.collect()
}

fn clock_seed() -> u64 {
	let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos() as u64);

	nanos ^ u64::from(std::process::id())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn nonce_is_prefixed_v4_uuid() {
		let nonce = generate_nonce();
		let uuid = nonce.strip_prefix(NONCE_PREFIX).expect("Nonce should carry the prefix.");

		assert_eq!(uuid.len(), 36);
		assert_eq!(uuid.chars().nth(14), Some('4'), "UUID should be version 4.");
		assert_ne!(generate_nonce(), nonce, "Nonces should not repeat.");
	}

	#[test]
	fn failing_source_falls_back_to_base36_token() {
		let nonce = nonce_from(|_| Err("entropy source unavailable"));
		let token =
			nonce.strip_prefix(NONCE_PREFIX).expect("Fallback nonce should carry the prefix.");

		assert_eq!(token.len(), FALLBACK_CHUNKS * FALLBACK_CHUNK_LEN);
		assert!(token.bytes().all(|b| BASE36.contains(&b)));
	}

	#[test]
	fn supplied_bytes_become_a_v4_uuid() {
		let nonce = nonce_from(|bytes| {
			bytes.fill(0xab);

			Ok::<_, &str>(())
		});

		assert_eq!(nonce, "ecnon-abababab-abab-4bab-abab-abababababab");
	}

	#[test]
	fn fallback_token_is_base36_and_deterministic_per_seed() {
		let lhs = fallback_token(&mut StdRng::seed_from_u64(7));
		let rhs = fallback_token(&mut StdRng::seed_from_u64(7));

		assert_eq!(lhs, rhs);
		assert_eq!(lhs.len(), FALLBACK_CHUNKS * FALLBACK_CHUNK_LEN);
		assert!(lhs.bytes().all(|b| BASE36.contains(&b)));
	}
}
