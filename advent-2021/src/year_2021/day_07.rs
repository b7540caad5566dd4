//! Day 7: The Treachery of Whales

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_csv;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021", "optimisation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let positions = parse_csv(input)?;
        if positions.is_empty() {
            return Err(ParseError::MissingData("no crab positions".into()));
        }
        Ok(positions)
    }
}

/// Cheapest total fuel over every alignment position between the outermost
/// crabs.
///
/// A candidate stops accumulating as soon as it exceeds the best total seen
/// so far.
fn min_fuel(positions: &[i64], cost: impl Fn(i64) -> i64) -> i64 {
    let (Some(&lo), Some(&hi)) = (positions.iter().min(), positions.iter().max()) else {
        return 0;
    };

    let mut best = i64::MAX;
    for target in lo..=hi {
        let mut total = 0;
        for &p in positions {
            total += cost((p - target).abs());
            if total >= best {
                break;
            }
        }
        best = best.min(total);
    }
    best
}

impl PartSolver<1> for Solver {
    fn solve(positions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(min_fuel(positions, |distance| distance).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(positions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(min_fuel(positions, |distance| distance * (distance + 1) / 2).to_string())
    }
}
