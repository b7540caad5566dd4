//! Day 3: Binary Diagnostic

use anyhow::{anyhow, ensure};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

#[derive(Debug)]
pub struct Report {
    width: usize,
    values: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut width = None;
        let values = parse_lines(input, |line| {
            ensure!(line.len() <= 32, "more than 32 bits");
            let expected = *width.get_or_insert(line.len());
            ensure!(
                line.len() == expected,
                "width {} differs from {}",
                line.len(),
                expected
            );
            u32::from_str_radix(line, 2).map_err(|e| anyhow!("{:?} is not binary: {}", line, e))
        })?;
        let width = width.ok_or_else(|| ParseError::MissingData("no readings".into()))?;
        Ok(Report { width, values })
    }
}

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|&&v| v >> bit & 1 == 1).count()
}

/// Narrow the readings bit by bit, most significant first, until one remains.
///
/// `keep_bit(ones, zeros)` picks the bit value that survives each round.
fn rating(report: &Report, keep_bit: impl Fn(usize, usize) -> u32) -> u32 {
    let mut remaining = report.values.clone();
    for bit in (0..report.width).rev() {
        if remaining.len() <= 1 {
            break;
        }
        let ones = ones_at(&remaining, bit);
        let wanted = keep_bit(ones, remaining.len() - ones);
        let filtered: Vec<u32> = remaining
            .iter()
            .copied()
            .filter(|&v| v >> bit & 1 == wanted)
            .collect();
        if !filtered.is_empty() {
            remaining = filtered;
        }
    }
    remaining[0]
}

impl PartSolver<1> for Solver {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma = (0..report.width)
            .filter(|&bit| 2 * ones_at(&report.values, bit) >= report.values.len())
            .fold(0u32, |acc, bit| acc | 1 << bit);
        let mask = if report.width == 32 {
            u32::MAX
        } else {
            (1 << report.width) - 1
        };
        let epsilon = !gamma & mask;
        Ok((gamma as u64 * epsilon as u64).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(report, |ones, zeros| u32::from(ones >= zeros));
        let co2 = rating(report, |ones, zeros| u32::from(ones < zeros));
        Ok((oxygen as u64 * co2 as u64).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day03.txt");

    #[test]
    fn power_consumption() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "198");
    }

    #[test]
    fn life_support_rating() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "230");
    }

    #[test]
    fn individual_ratings() {
        let report = Solver::parse(SAMPLE).unwrap();
        assert_eq!(rating(&report, |ones, zeros| u32::from(ones >= zeros)), 23);
        assert_eq!(rating(&report, |ones, zeros| u32::from(ones < zeros)), 10);
    }

    #[test]
    fn rejects_ragged_width() {
        assert!(Solver::parse("0101\n011\n").is_err());
    }
}
