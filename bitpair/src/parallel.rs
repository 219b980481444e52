//! Rayon-parallel verification sweeps
//!
//! The swept range is split into fixed-size chunks, each verified serially
//! on the thread pool. `find_map_first` keeps the outcome deterministic:
//! the reported mismatch is the lowest-valued one, identical to what the
//! serial sweep would return. Both tables are fully built before the pool
//! borrows them, so no worker can observe partial construction.

use bitpair_core::{verify_range, ByteTable, Result, Verification, WordTable};
use rayon::prelude::*;

/// Values per work unit. Large enough to amortize scheduling, small enough
/// that a sweep stops soon after a mismatch.
const CHUNK_SIZE: u32 = 1 << 20;

/// Sweep `[0, bound)` across the rayon thread pool
pub fn verify_parallel(
    bound: u32,
    byte_table: &ByteTable,
    word_table: &WordTable,
) -> Result<Verification> {
    let chunk_count = bound.div_ceil(CHUNK_SIZE);

    let first_failure = (0..chunk_count).into_par_iter().find_map_first(|chunk| {
        let start = chunk * CHUNK_SIZE;
        let end = start.saturating_add(CHUNK_SIZE).min(bound);

        match verify_range(start..end, byte_table, word_table) {
            Ok(Verification::Verified { .. }) => None,
            Ok(Verification::Mismatch(mismatch)) => Some(Ok(mismatch)),
            Err(err) => Some(Err(err)),
        }
    });

    match first_failure {
        None => Ok(Verification::Verified {
            values_checked: u64::from(bound),
        }),
        Some(Ok(mismatch)) => Ok(Verification::Mismatch(mismatch)),
        Some(Err(err)) => Err(err),
    }
}
