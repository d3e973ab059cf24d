// SPDX-License-Identifier: MIT

//! Content hashing for cache invalidation.

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Seed reserved for hashing an absent buffer.
const ABSENT_SEED: u64 = u64::MAX;

/// Computes the change-detection token for a raw buffer.
///
/// The digest is a deterministic xxh3 hash used purely to decide whether a
/// cache slot is stale; it carries no cryptographic guarantee. An absent
/// buffer hashes to a fixed sentinel so a later `None` → `Some` transition
/// is detected. The sentinel is distinct from content digests in practice
/// (it uses a reserved seed over empty input), but collision freedom is not
/// claimed.
#[must_use]
pub fn content_hash(buffer: Option<&[u8]>) -> u64 {
    match buffer {
        Some(bytes) => xxh3_64(bytes),
        None => xxh3_64_with_seed(&[], ABSENT_SEED),
    }
}
