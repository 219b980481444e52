//! Cross-strategy equivalence tests
//!
//! The central property: for every value, all four strategies answer the
//! same. Exercised over a bounded prefix sweep, targeted boundary values,
//! and a seeded random sample of the full 32-bit domain.

use bitpair::{
    bit_scan, shift_mask, BitpairError, ByteTable, StrategySuite, Verification, WordTable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn prefix_sweep_agrees() {
    let suite = StrategySuite::new();

    let outcome = suite.verify(1 << 20).unwrap();
    assert_eq!(
        outcome,
        Verification::Verified {
            values_checked: 1 << 20
        }
    );
}

#[test]
fn parallel_sweep_agrees_with_serial() {
    let suite = StrategySuite::new();
    let bound = (1 << 22) + 12_345;

    assert_eq!(
        suite.verify(bound).unwrap(),
        suite.verify_parallel(bound).unwrap()
    );
}

#[test]
fn boundary_straddling_value() {
    // Bits 7 and 8 set: a pair crossing the byte-window boundary. Disjoint
    // windows split at 7/8 would miss it.
    let suite = StrategySuite::new();

    assert!(bit_scan(384));
    assert_eq!(suite.evaluate_all(384).unwrap(), [true; 4]);
}

#[test]
fn zero_and_all_ones() {
    let suite = StrategySuite::new();

    assert_eq!(suite.evaluate_all(0).unwrap(), [false; 4]);
    assert_eq!(suite.evaluate_all(u32::MAX).unwrap(), [true; 4]);
}

#[test]
fn powers_of_two_have_no_pair() {
    let suite = StrategySuite::new();

    for shift in 0..32 {
        assert_eq!(
            suite.evaluate_all(1 << shift).unwrap(),
            [false; 4],
            "bit {shift}"
        );
    }
}

#[test]
fn known_literal_cases() {
    let suite = StrategySuite::new();

    assert_eq!(suite.evaluate_all(3).unwrap(), [true; 4]); // 0b11
    assert_eq!(suite.evaluate_all(7).unwrap(), [true; 4]); // 0b111
    assert_eq!(suite.evaluate_all(10).unwrap(), [false; 4]); // 0b1010
    assert_eq!(suite.evaluate_all(12).unwrap(), [true; 4]); // 0b1100
}

#[test]
fn random_sample_of_full_domain_agrees() {
    let suite = StrategySuite::new();
    let mut rng = StdRng::seed_from_u64(0x0add_bb17);

    for _ in 0..100_000 {
        let value: u32 = rng.gen();
        let expected = bit_scan(value);

        assert_eq!(shift_mask(value), expected, "shift-mask at {value:#034b}");
        let answers = suite.evaluate_all(value).unwrap();
        assert_eq!(answers, [expected; 4], "table strategies at {value:#034b}");
    }
}

#[test]
fn table_build_is_idempotent() {
    assert_eq!(ByteTable::build(), ByteTable::build());
    assert_eq!(*WordTable::build_boxed(), *WordTable::build_boxed());
}

#[test]
fn unbuilt_tables_fail_loudly() {
    assert_eq!(
        ByteTable::empty().evaluate(3),
        Err(BitpairError::TableNotBuilt)
    );
    assert_eq!(
        WordTable::empty().evaluate(3),
        Err(BitpairError::TableNotBuilt)
    );
}
