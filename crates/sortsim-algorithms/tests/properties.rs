//! Property tests: arbitrary inputs, arbitrary cancellation points.

use proptest::prelude::*;
use sortsim_algorithms::AlgorithmKind;
use sortsim_core::ArrayState;
use sortsim_test_utils::is_permutation;

fn arb_kind() -> impl Strategy<Value = AlgorithmKind> {
    prop::sample::select(AlgorithmKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn sorts_any_input(
        kind in arb_kind(),
        values in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let mut expected = values.clone();
        expected.sort();

        let mut array = ArrayState::from_vec(values);
        let mut cursor = kind.cursor(array.len());
        while !cursor.is_done() {
            cursor.step(&mut array).unwrap();
        }
        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }

    #[test]
    fn stopping_early_leaves_a_permutation(
        kind in arb_kind(),
        values in prop::collection::vec(-50i32..50, 0..120),
        stop_after in 0usize..400,
    ) {
        let mut array = ArrayState::from_vec(values.clone());
        let mut cursor = kind.cursor(array.len());
        for _ in 0..stop_after {
            if cursor.is_done() {
                break;
            }
            cursor.step(&mut array).unwrap();
        }
        prop_assert!(is_permutation(&values, array.as_slice()));
    }
}
