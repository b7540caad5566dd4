//! Advent of Code 2021
//!
//! Every module registers its `Solver` for `(2021, day)` through
//! `#[derive(AutoRegisterSolver)]`.

use advent_solver::ParseError;

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_17;
pub mod day_18;
pub mod day_20;
pub mod day_22;
pub mod day_25;

/// Parse every non-blank line with `parse_line`, reporting failures with
/// their 1-based line number.
pub(crate) fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| parse_line(line).map_err(|e| ParseError::at_line(index, e)))
        .collect()
}

/// Parse a single comma separated line of integers
pub(crate) fn parse_csv<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    input
        .trim()
        .split(',')
        .map(|n| {
            n.trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", n, e)))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_util {
    use advent_solver::{Solver, SolverExt};

    /// Parse `input` freshly and solve `part`
    pub fn solve<S: Solver>(input: &str, part: u8) -> String {
        let mut shared = S::parse(input).expect("sample parses");
        S::solve_part_checked_range(&mut shared, part).expect("sample solves")
    }
}
