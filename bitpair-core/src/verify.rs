//! Cross-strategy verification sweeps
//!
//! The verifier replays every value in a bounded range through each strategy
//! and compares the answers against the reference predicate, stopping at the
//! first disagreement. A single proven divergence already falsifies the
//! equivalence claim, so the sweep never continues past one.

use core::fmt;
use core::ops::Range;

use crate::error::Result;
use crate::predicate::{bit_scan, shift_mask};
use crate::table::{ByteTable, WordTable};

/// Names the non-reference strategy a sweep result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// `v & (v << 1) != 0`
    ShiftMask,
    /// Five overlapping 8-bit windows against a 256-entry table
    ByteTable,
    /// Three overlapping 16-bit windows against a 65536-entry table
    WordTable,
}

impl Strategy {
    /// Human-readable strategy name
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::ShiftMask => "shift-mask",
            Strategy::ByteTable => "byte-table",
            Strategy::WordTable => "word-table",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First disagreement found by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mismatch {
    /// Value the strategies disagreed on
    pub value: u32,
    /// Strategy that diverged from the reference
    pub strategy: Strategy,
    /// What the reference predicate returned
    pub reference: bool,
    /// What the diverging strategy returned
    pub actual: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} ({:#034b}): {} returned {}, reference returned {}",
            self.value, self.value, self.strategy, self.actual, self.reference
        )
    }
}

/// Outcome of a verification sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verification {
    /// Every strategy agreed with the reference across the swept range
    Verified {
        /// Number of values checked
        values_checked: u64,
    },
    /// Sweep stopped at the first disagreement
    Mismatch(Mismatch),
}

impl Verification {
    /// True when the sweep completed without disagreement
    pub const fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified { .. })
    }
}

/// Sweep `[0, bound)` comparing every strategy against the reference
pub fn verify(bound: u32, byte_table: &ByteTable, word_table: &WordTable) -> Result<Verification> {
    verify_range(0..bound, byte_table, word_table)
}

/// Sweep an arbitrary range of values
///
/// Building block for chunked sweeps; `verify` is the `[0, bound)` case.
/// Unbuilt-table errors propagate, a strategy disagreement does not: it is
/// the `Verification::Mismatch` outcome, reported with both answers.
pub fn verify_range(
    range: Range<u32>,
    byte_table: &ByteTable,
    word_table: &WordTable,
) -> Result<Verification> {
    let mut values_checked = 0u64;

    for value in range {
        let reference = bit_scan(value);

        let actual = shift_mask(value);
        if actual != reference {
            return Ok(Verification::Mismatch(Mismatch {
                value,
                strategy: Strategy::ShiftMask,
                reference,
                actual,
            }));
        }

        let actual = byte_table.evaluate(value)?;
        if actual != reference {
            return Ok(Verification::Mismatch(Mismatch {
                value,
                strategy: Strategy::ByteTable,
                reference,
                actual,
            }));
        }

        let actual = word_table.evaluate(value)?;
        if actual != reference {
            return Ok(Verification::Mismatch(Mismatch {
                value,
                strategy: Strategy::WordTable,
                reference,
                actual,
            }));
        }

        values_checked += 1;
    }

    Ok(Verification::Verified { values_checked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitpairError;

    #[test]
    fn test_sweep_verifies_prefix() {
        let byte_table = ByteTable::build();
        let word_table = WordTable::build();

        let outcome = verify(1 << 16, &byte_table, &word_table).unwrap();
        assert_eq!(
            outcome,
            Verification::Verified {
                values_checked: 1 << 16
            }
        );
        assert!(outcome.is_verified());
    }

    #[test]
    fn test_empty_sweep() {
        let byte_table = ByteTable::build();
        let word_table = WordTable::build();

        assert_eq!(
            verify(0, &byte_table, &word_table),
            Ok(Verification::Verified { values_checked: 0 })
        );
    }

    #[test]
    fn test_range_sweep_counts_its_own_values() {
        let byte_table = ByteTable::build();
        let word_table = WordTable::build();

        let outcome = verify_range(1_000..9_000, &byte_table, &word_table).unwrap();
        assert_eq!(
            outcome,
            Verification::Verified {
                values_checked: 8_000
            }
        );
    }

    #[test]
    fn test_unbuilt_table_error_propagates() {
        let byte_table = ByteTable::empty();
        let word_table = WordTable::build();

        // Value 0 passes every strategy, so the sweep reaches the byte table
        // and trips its sentinel check
        assert_eq!(
            verify(16, &byte_table, &word_table),
            Err(BitpairError::TableNotBuilt)
        );
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::ShiftMask.name(), "shift-mask");
        assert_eq!(Strategy::ByteTable.name(), "byte-table");
        assert_eq!(Strategy::WordTable.name(), "word-table");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_mismatch_rendering() {
        use alloc::format;

        let mismatch = Mismatch {
            value: 384,
            strategy: Strategy::ByteTable,
            reference: true,
            actual: false,
        };

        let rendered = format!("{mismatch}");
        assert!(rendered.contains("byte-table"));
        assert!(rendered.contains("0b00000000000000000000000110000000"));
    }
}
