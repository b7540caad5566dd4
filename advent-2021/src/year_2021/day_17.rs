//! Day 17: Trick Shot

use std::sync::LazyLock;

use regex::Regex;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 17, tags = ["2021", "simulation"])]
pub struct Solver;

static TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)")
        .expect("target pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    x: (i64, i64),
    y: (i64, i64),
}

/// Peak height of every launch velocity that lands in the target
#[derive(Debug)]
pub struct Probe {
    target: Target,
    hits: Option<Vec<i64>>,
}

impl Target {
    fn contains(&self, (x, y): (i64, i64)) -> bool {
        (self.x.0..=self.x.1).contains(&x) && (self.y.0..=self.y.1).contains(&y)
    }

    /// Fly a probe and return its apex if some step lands in the target
    fn launch(&self, mut vx: i64, mut vy: i64) -> Option<i64> {
        let (mut x, mut y) = (0, 0);
        let mut apex = 0;
        loop {
            x += vx;
            y += vy;
            vx -= vx.signum();
            vy -= 1;
            apex = apex.max(y);
            if self.contains((x, y)) {
                return Some(apex);
            }
            let falling_past = vy < 0 && y < self.y.0;
            let stalled_outside = vx == 0 && !(self.x.0..=self.x.1).contains(&x);
            if falling_past || stalled_outside {
                return None;
            }
        }
    }

    fn hits(&self) -> Vec<i64> {
        let vx_range = self.x.0.min(0)..=self.x.1.max(0);
        let vy_max = self.y.0.abs().max(self.y.1.abs());
        let vy_range = self.y.0.min(0)..=vy_max;
        vx_range
            .flat_map(|vx| vy_range.clone().map(move |vy| (vx, vy)))
            .filter_map(|(vx, vy)| self.launch(vx, vy))
            .collect()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Probe;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let caps = TARGET
            .captures(input.trim())
            .ok_or_else(|| ParseError::InvalidFormat("expected `target area: x=A..B, y=C..D`".into()))?;
        let n = |i: usize| {
            caps[i]
                .parse::<i64>()
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))
        };
        let (x0, x1, y0, y1) = (n(1)?, n(2)?, n(3)?, n(4)?);
        Ok(Probe {
            target: Target {
                x: (x0.min(x1), x0.max(x1)),
                y: (y0.min(y1), y0.max(y1)),
            },
            hits: None,
        })
    }
}

fn hits(probe: &mut Probe) -> &[i64] {
    probe.hits.get_or_insert_with(|| probe.target.hits())
}

impl PartSolver<1> for Solver {
    fn solve(probe: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        hits(probe)
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::failed("no launch velocity hits the target"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(probe: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(hits(probe).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day17.txt");

    #[test]
    fn highest_apex() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "45");
    }

    #[test]
    fn distinct_velocities() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "112");
    }

    #[test]
    fn individual_launches() {
        let probe = Solver::parse(SAMPLE).unwrap();
        assert_eq!(probe.target.launch(7, 2), Some(3));
        assert_eq!(probe.target.launch(6, 9), Some(45));
        assert_eq!(probe.target.launch(17, -4), None);
    }
}
