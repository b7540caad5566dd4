//! Property tests for part range checking

use advent_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with a configurable number of parts that echoes the part number
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => Echo::<1>::solve_part_checked_range(&mut (), part),
        2 => Echo::<2>::solve_part_checked_range(&mut (), part),
        _ => Echo::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above `PARTS` are `PartOutOfRange`; the rest delegate
    #[test]
    fn out_of_range_parts_are_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(parts, part);
        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In-range parts give exactly what `solve_part` gives
    #[test]
    fn in_range_parts_delegate(part in 1u8..=2) {
        let direct = Echo::<2>::solve_part(&mut (), part).unwrap();
        let via_check = Echo::<2>::solve_part_checked_range(&mut (), part).unwrap();
        prop_assert_eq!(direct, via_check);
    }
}

#[test]
fn single_part_solver_rejects_part_two() {
    assert!(matches!(
        Echo::<1>::solve_part_checked_range(&mut (), 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn part_zero_is_always_out_of_range() {
    assert!(matches!(
        Echo::<2>::solve_part_checked_range(&mut (), 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}
