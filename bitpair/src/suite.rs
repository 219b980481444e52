//! Strategy suite bundling one built table of each width
//!
//! Most callers want all four strategies ready to compare; the suite owns
//! the two tables so construction happens exactly once, up front.

use bitpair_core::{bit_scan, shift_mask, ByteTable, Result, Verification, WordTable};

/// Owns a built table of each sub-word width alongside the scalar strategies
#[derive(Debug, Clone)]
pub struct StrategySuite {
    byte_table: ByteTable,
    word_table: Box<WordTable>,
}

impl StrategySuite {
    /// Build both lookup tables
    pub fn new() -> Self {
        Self {
            byte_table: ByteTable::build(),
            word_table: WordTable::build_boxed(),
        }
    }

    /// Access the 256-entry table
    pub fn byte_table(&self) -> &ByteTable {
        &self.byte_table
    }

    /// Access the 65536-entry table
    pub fn word_table(&self) -> &WordTable {
        &self.word_table
    }

    /// Evaluate every strategy on one value
    ///
    /// Returns `[reference, shift-mask, byte-table, word-table]` answers.
    pub fn evaluate_all(&self, value: u32) -> Result<[bool; 4]> {
        Ok([
            bit_scan(value),
            shift_mask(value),
            self.byte_table.evaluate(value)?,
            self.word_table.evaluate(value)?,
        ])
    }

    /// Serial sweep of `[0, bound)` against the reference
    pub fn verify(&self, bound: u32) -> Result<Verification> {
        bitpair_core::verify(bound, &self.byte_table, &self.word_table)
    }

    /// Parallel sweep of `[0, bound)` on the rayon thread pool
    pub fn verify_parallel(&self, bound: u32) -> Result<Verification> {
        crate::parallel::verify_parallel(bound, &self.byte_table, &self.word_table)
    }
}

impl Default for StrategySuite {
    fn default() -> Self {
        Self::new()
    }
}
