//! Day 2: Dive!

use anyhow::{anyhow, bail};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (direction, amount) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `<direction> <amount>`"))?;
            let amount: i64 = amount.parse()?;
            Ok(match direction {
                "forward" => Command::Forward(amount),
                "down" => Command::Down(amount),
                "up" => Command::Up(amount),
                other => bail!("unknown direction {:?}", other),
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth) =
            commands
                .iter()
                .fold((0, 0), |(horizontal, depth), command| match *command {
                    Command::Forward(n) => (horizontal + n, depth),
                    Command::Down(n) => (horizontal, depth + n),
                    Command::Up(n) => (horizontal, depth - n),
                });
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth, _aim) =
            commands
                .iter()
                .fold((0, 0, 0), |(horizontal, depth, aim), command| match *command {
                    Command::Forward(n) => (horizontal + n, depth + aim * n, aim),
                    Command::Down(n) => (horizontal, depth, aim + n),
                    Command::Up(n) => (horizontal, depth, aim - n),
                });
        Ok((horizontal * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day02.txt");

    #[test]
    fn plain_movement() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "150");
    }

    #[test]
    fn movement_with_aim() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "900");
    }

    #[test]
    fn unknown_direction_is_a_line_error() {
        let err = Solver::parse("forward 1\nsideways 3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
    }
}
