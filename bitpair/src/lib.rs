//! Bitpair - Adjacent-Bit Predicate Strategies
//!
//! This library answers one question four ways: does the binary
//! representation of a 32-bit value contain two adjacent set bits? The
//! strategies trade table memory against per-call work, and a verification
//! sweep proves them equivalent over any bounded prefix of the input domain.
//!
//! ## Architecture
//!
//! Bitpair follows a clean specification/implementation separation:
//!
//! - **bitpair-core**: Pure predicate strategies, lookup tables, and the
//!   serial verification sweep (no_std, no I/O)
//! - **bitpair**: Parallel sweeps, the strategy suite, CLI and benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use bitpair::{StrategySuite, Verification};
//!
//! let suite = StrategySuite::new();
//!
//! // Single values, every strategy at once
//! let [reference, shift, byte, word] = suite.evaluate_all(0b1100).expect("tables built");
//! assert!(reference && shift && byte && word);
//!
//! // Bounded equivalence sweep
//! match suite.verify(1 << 16).expect("tables built") {
//!     Verification::Verified { values_checked } => assert_eq!(values_checked, 1 << 16),
//!     Verification::Mismatch(mismatch) => panic!("strategies diverged: {mismatch}"),
//! }
//! ```
//!
//! ## Features
//!
//! - **Four strategies**: reference bit scan, branch-free shift-mask, and
//!   8/16-bit windowed table lookups
//! - **Loud initialization failures**: unbuilt tables are detected on every
//!   query instead of returning a silent wrong answer
//! - **Parallel verification**: rayon sweep that reports the same first
//!   mismatch as the serial one
//! - **Serde support**: sweep outcomes serialize for machine-readable reports

// Re-export core strategies, tables, and verification types
pub use bitpair_core::{
    // Scalar strategies
    bit_scan, shift_mask,
    // Lookup tables
    ByteTable, PairTable, WordTable, BYTE_TABLE_BYTES, WORD_TABLE_BYTES,
    // Serial verification
    verify, verify_range, Mismatch, Strategy, Verification,
    // Error handling
    BitpairError, Result,
};

// Implementation modules
pub mod parallel;
pub mod suite;

// Public exports
pub use parallel::verify_parallel;
pub use suite::StrategySuite;
