#![no_std]

//! Bitpair Core - Adjacent-Bit Predicate Definitions
//!
//! This crate provides the predicate strategies, packed lookup tables, and
//! verification sweep for detecting two adjacent set bits in a 32-bit value

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod predicate;
pub mod table;
pub mod verify;

pub use error::*;
pub use predicate::*;
pub use table::*;
pub use verify::*;
