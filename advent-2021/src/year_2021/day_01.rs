//! Day 1: Sonar Sweep

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "sequence"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| Ok(line.parse::<u32>()?))
    }
}

/// Count depths deeper than the one `gap` positions earlier.
///
/// Two neighbouring 3-wide windows share their middle values, so comparing
/// the window sums reduces to comparing `depths[i + 3]` with `depths[i]`.
fn count_increases(depths: &[u32], gap: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(gap))
        .filter(|(before, after)| after > before)
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(depths, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(depths, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day01.txt");

    #[test]
    fn counts_single_increases() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "7");
    }

    #[test]
    fn counts_window_increases() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "5");
    }

    #[test]
    fn rejects_non_numeric_depth() {
        let err = Solver::parse("199\nabc\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
    }
}
