//! Packed lookup tables over sub-word bit patterns
//!
//! A [`PairTable`] maps every value of a fixed sub-word width to one bit:
//! whether that value, taken as a standalone pattern, contains two adjacent
//! set bits. A 32-bit query is answered by decomposing the value into
//! overlapping sub-word windows and ORing the table entries.

use crate::error::{BitpairError, Result};
use crate::predicate::bit_scan;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Entry that is set in every built table: `0b11` has adjacent bits. The
/// explicit `built` flag is authoritative; this entry doubles as a debug
/// cross-check that a flagged table really holds its data.
const SENTINEL_INDEX: usize = 0b11;

/// Packed byte footprint of the 256-entry table (8-bit sub-words)
pub const BYTE_TABLE_BYTES: usize = 32;

/// Packed byte footprint of the 65536-entry table (16-bit sub-words)
pub const WORD_TABLE_BYTES: usize = 8192;

/// Packed bit table with fixed-size storage (N bytes = N*8 entries)
///
/// The entry count is assumed to be a power of two; [`ByteTable`] and
/// [`WordTable`] are the two instantiations with windowed evaluation.
/// There is no public mutation API: a table is either the unbuilt value
/// from [`PairTable::empty`] or fully populated by [`PairTable::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable<const N: usize> {
    /// Bit array (N bytes = N*8 entries)
    bits: [u8; N],
    /// Set once `populate` has written every entry
    built: bool,
}

/// 256-entry table indexed by 8-bit sub-words
pub type ByteTable = PairTable<BYTE_TABLE_BYTES>;

/// 65536-entry table indexed by 16-bit sub-words
pub type WordTable = PairTable<WORD_TABLE_BYTES>;

impl<const N: usize> PairTable<N> {
    /// Number of boolean entries in the table
    pub const ENTRY_COUNT: usize = N * 8;

    /// Mask extracting a sub-word index from a wider value
    pub const INDEX_MASK: u32 = (Self::ENTRY_COUNT - 1) as u32;

    /// Create an unbuilt table with every entry at its zeroed default
    ///
    /// The result fails [`PairTable::is_built`] and any windowed evaluation
    /// against it reports [`BitpairError::TableNotBuilt`].
    pub const fn empty() -> Self {
        Self {
            bits: [0; N],
            built: false,
        }
    }

    /// Build the table: entry `k` becomes `bit_scan(k)` for every sub-word
    /// value `k`
    ///
    /// Building twice yields observably equal tables.
    pub fn build() -> Self {
        let mut table = Self::empty();
        table.populate();
        table
    }

    /// Build directly on the heap, avoiding a large stack copy for the
    /// 16-bit table
    #[cfg(feature = "alloc")]
    pub fn build_boxed() -> Box<Self> {
        let mut table = Box::new(Self::empty());
        table.populate();
        table
    }

    fn populate(&mut self) {
        for k in 0..Self::ENTRY_COUNT {
            if bit_scan(k as u32) {
                let byte_index = k / 8;
                let bit_offset = k % 8;
                self.bits[byte_index] |= 1 << bit_offset;
            }
        }
        self.built = true;
    }

    /// Read entry `index` (taken modulo the entry count)
    pub fn entry(&self, index: usize) -> bool {
        let bit_index = index % Self::ENTRY_COUNT;
        let byte_index = bit_index / 8;
        let bit_offset = bit_index % 8;

        (self.bits[byte_index] & (1 << bit_offset)) != 0
    }

    /// Whether construction has completed for this table
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// View the packed entries (for inspection or serialization)
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bits
    }
}

impl PairTable<BYTE_TABLE_BYTES> {
    /// Sub-word width in bits
    pub const SUBWORD_BITS: u32 = 8;

    /// Window start offsets covering bits 0-31 with one-bit overlaps
    ///
    /// Four windows stepping by 7 so consecutive windows share a bit, plus
    /// a final window pinned to the top byte. The last window re-reads bits
    /// 24-30; that redundancy is simpler than special-casing the boundary.
    pub const WINDOWS: [u32; 5] = [0, 7, 14, 21, 24];

    /// Evaluate the predicate by table lookup over five overlapping 8-bit
    /// windows
    ///
    /// A pair straddling a window boundary (bits 7 and 8, say) is caught by
    /// the overlapping window starting at bit 7; disjoint windows would
    /// return a false negative for it.
    pub fn evaluate(&self, value: u32) -> Result<bool> {
        if !self.is_built() {
            return Err(BitpairError::TableNotBuilt);
        }
        debug_assert!(self.entry(SENTINEL_INDEX), "built table lost its 0b11 entry");

        Ok(Self::WINDOWS
            .iter()
            .any(|&offset| self.entry(((value >> offset) & Self::INDEX_MASK) as usize)))
    }
}

impl PairTable<WORD_TABLE_BYTES> {
    /// Sub-word width in bits
    pub const SUBWORD_BITS: u32 = 16;

    /// Window start offsets covering bits 0-31 with overlap
    ///
    /// The windows at 15 and 16 overlap the low window by 1 and 15 bits
    /// respectively; together the three cover every adjacent pair.
    pub const WINDOWS: [u32; 3] = [0, 15, 16];

    /// Evaluate the predicate by table lookup over three overlapping 16-bit
    /// windows
    pub fn evaluate(&self, value: u32) -> Result<bool> {
        if !self.is_built() {
            return Err(BitpairError::TableNotBuilt);
        }
        debug_assert!(self.entry(SENTINEL_INDEX), "built table lost its 0b11 entry");

        Ok(Self::WINDOWS
            .iter()
            .any(|&offset| self.entry(((value >> offset) & Self::INDEX_MASK) as usize)))
    }
}
