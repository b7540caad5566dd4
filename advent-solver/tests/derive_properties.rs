//! Property tests for `#[derive(AocSolver)]` dispatch and shared-data handling

use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Sonar-style solver: part 1 counts increases, part 2 counts increases of
/// three-wide window sums
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Sonar;

impl AocParser for Sonar {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(i, l)| l.parse().map_err(|e| ParseError::at_line(i, e)))
            .collect()
    }
}

fn increases(depths: &[u32], gap: usize) -> usize {
    depths.windows(gap + 1).filter(|w| w[gap] > w[0]).count()
}

impl PartSolver<1> for Sonar {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(depths, 1).to_string())
    }
}

impl PartSolver<2> for Sonar {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(depths, 3).to_string())
    }
}

fn render(depths: &[u32]) -> String {
    depths.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` gives the same answer as calling `PartSolver<N>` directly
    #[test]
    fn solve_part_dispatches_to_part_solver(
        depths in prop::collection::vec(0u32..10_000, 0..50),
        part in 1u8..=2
    ) {
        let input = render(&depths);
        let mut via_dispatch = Sonar::parse(&input).unwrap();
        let mut direct = Sonar::parse(&input).unwrap();

        let dispatched = Sonar::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <Sonar as PartSolver<1>>::solve(&mut direct),
            2 => <Sonar as PartSolver<2>>::solve(&mut direct),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// Parts the derive does not know about are reported, never panicking
    #[test]
    fn unknown_part_is_rejected(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut depths = Sonar::parse("1\n2\n3").unwrap();
        match Sonar::solve_part(&mut depths, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Window comparison `a[i+3] > a[i]` matches comparing explicit window sums
    #[test]
    fn window_shortcut_matches_window_sums(depths in prop::collection::vec(0u32..1_000, 0..40)) {
        let sums: Vec<u32> = depths.windows(3).map(|w| w.iter().sum()).collect();
        let by_sums = sums.windows(2).filter(|w| w[1] > w[0]).count();

        let mut shared = Sonar::parse(&render(&depths)).unwrap();
        prop_assert_eq!(Sonar::solve_part(&mut shared, 2).unwrap(), by_sums.to_string());
    }

    /// Solving twice on the same data gives the same answer
    #[test]
    fn solving_is_repeatable(depths in prop::collection::vec(0u32..1_000, 0..40), part in 1u8..=2) {
        let mut shared = Sonar::parse(&render(&depths)).unwrap();
        let first = Sonar::solve_part(&mut shared, part).unwrap();
        let second = Sonar::solve_part(&mut shared, part).unwrap();
        prop_assert_eq!(first, second);
    }
}

mod memoised_parts {
    use super::*;

    #[derive(Debug)]
    struct Crabs {
        positions: Vec<i64>,
        span: Option<(i64, i64)>,
    }

    /// Part 1 records the position span; part 2 reads it back
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct SpanSolver;

    impl AocParser for SpanSolver {
        type SharedData<'a> = Crabs;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let positions = input
                .split(',')
                .map(|n| n.trim().parse().map_err(|_| ParseError::InvalidFormat(n.into())))
                .collect::<Result<Vec<i64>, _>>()?;
            Ok(Crabs {
                positions,
                span: None,
            })
        }
    }

    impl PartSolver<1> for SpanSolver {
        fn solve(crabs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let min = crabs.positions.iter().copied().min().unwrap_or(0);
            let max = crabs.positions.iter().copied().max().unwrap_or(0);
            crabs.span = Some((min, max));
            Ok((max - min).to_string())
        }
    }

    impl PartSolver<2> for SpanSolver {
        fn solve(crabs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let (min, max) = crabs.span.unwrap_or((0, 0));
            Ok(format!("{}..={}", min, max))
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn part_two_sees_what_part_one_stored(positions in prop::collection::vec(0i64..2_000, 1..20)) {
            let input = positions.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
            let mut crabs = SpanSolver::parse(&input).unwrap();

            SpanSolver::solve_part(&mut crabs, 1).unwrap();
            let min = *positions.iter().min().unwrap();
            let max = *positions.iter().max().unwrap();
            prop_assert_eq!(crabs.span, Some((min, max)));
            prop_assert_eq!(SpanSolver::solve_part(&mut crabs, 2).unwrap(), format!("{}..={}", min, max));
        }
    }
}
