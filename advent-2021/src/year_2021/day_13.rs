//! Day 13: Transparent Origami

use std::collections::BTreeSet;

use anyhow::{anyhow, bail};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["2021", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Fold the bottom half up along `y`
    Up(u32),
    /// Fold the right half left along `x`
    Left(u32),
}

impl Fold {
    /// Dots on the fold line vanish, as do dots that would land past the
    /// opposite edge.
    fn apply(self, dots: &BTreeSet<(u32, u32)>) -> BTreeSet<(u32, u32)> {
        let mirror = |v: u32, line: u32| match v.cmp(&line) {
            std::cmp::Ordering::Less => Some(v),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => line.checked_mul(2).and_then(|d| d.checked_sub(v)),
        };
        dots.iter()
            .filter_map(|&(x, y)| match self {
                Fold::Up(line) => Some((x, mirror(y, line)?)),
                Fold::Left(line) => Some((mirror(x, line)?, y)),
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct Manual {
    dots: BTreeSet<(u32, u32)>,
    folds: Vec<Fold>,
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (dots, folds) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("fold instructions".into()))?;

        let dots = parse_lines(dots, |line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("expected `x,y`"))?;
            Ok((x.parse::<u32>()?, y.parse::<u32>()?))
        })?
        .into_iter()
        .collect();

        let folds = parse_lines(folds, |line| {
            let (axis, at) = line
                .strip_prefix("fold along ")
                .and_then(|rest| rest.split_once('='))
                .ok_or_else(|| anyhow!("expected `fold along <axis>=<n>`"))?;
            let at = at.parse()?;
            Ok(match axis {
                "x" => Fold::Left(at),
                "y" => Fold::Up(at),
                other => bail!("unknown axis {:?}", other),
            })
        })?;

        Ok(Manual { dots, folds })
    }
}

/// Draw the dots as `#` on a `.` background, one text row per `y`
fn render(dots: &BTreeSet<(u32, u32)>) -> String {
    let width = dots.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
    let height = dots.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PartSolver<1> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = manual
            .folds
            .first()
            .ok_or_else(|| SolveError::failed("no folds"))?;
        Ok(first.apply(&manual.dots).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dots = manual
            .folds
            .iter()
            .fold(manual.dots.clone(), |dots, fold| fold.apply(&dots));
        Ok(render(&dots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day13.txt");

    #[test]
    fn dots_after_first_fold() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "17");
    }

    #[test]
    fn renders_code_after_all_folds() {
        assert_eq!(
            solve::<Solver>(SAMPLE, 2),
            "#####\n#...#\n#...#\n#...#\n#####"
        );
    }

    #[test]
    fn fold_up_mirrors_below_the_line() {
        let dots = BTreeSet::from([(0, 0), (1, 4), (2, 2)]);
        assert_eq!(
            Fold::Up(2).apply(&dots),
            BTreeSet::from([(0, 0), (1, 0)])
        );
    }

    #[test]
    fn fold_near_integer_limit_drops_unreachable_dots() {
        let dots = BTreeSet::from([(4_000_000_000, 1), (5, 1)]);
        assert_eq!(
            Fold::Left(3_000_000_000).apply(&dots),
            BTreeSet::from([(5, 1)])
        );
        assert_eq!(
            solve::<Solver>("4000000000,1\n\nfold along x=3000000000", 1),
            "0"
        );
    }

    #[test]
    fn unknown_axis_is_rejected() {
        assert!(Solver::parse("1,1\n\nfold along z=3").is_err());
    }
}
