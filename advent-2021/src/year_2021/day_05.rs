//! Day 5: Hydrothermal Venture

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::anyhow;
use regex::Regex;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "geometry"])]
pub struct Solver;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+),(\d+)\s*->\s*(\d+),(\d+)$").expect("segment pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: (i32, i32),
    to: (i32, i32),
}

impl Segment {
    fn is_axis_aligned(&self) -> bool {
        self.from.0 == self.to.0 || self.from.1 == self.to.1
    }

    /// Every integer point on the segment; valid for horizontal, vertical
    /// and 45 degree segments.
    fn points(&self) -> impl Iterator<Item = (i32, i32)> {
        let dx = (self.to.0 - self.from.0).signum();
        let dy = (self.to.1 - self.from.1).signum();
        let steps = (self.to.0 - self.from.0)
            .abs()
            .max((self.to.1 - self.from.1).abs());
        let from = self.from;
        (0..=steps).map(move |i| (from.0 + i * dx, from.1 + i * dy))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Segment>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let caps = SEGMENT
                .captures(line)
                .ok_or_else(|| anyhow!("expected `x1,y1 -> x2,y2`"))?;
            let n = |i: usize| caps[i].parse::<i32>();
            let segment = Segment {
                from: (n(1)?, n(2)?),
                to: (n(3)?, n(4)?),
            };
            let (w, h) = (
                (segment.to.0 - segment.from.0).abs(),
                (segment.to.1 - segment.from.1).abs(),
            );
            if !segment.is_axis_aligned() && w != h {
                return Err(anyhow!("segment is neither axis aligned nor diagonal"));
            }
            Ok(segment)
        })
    }
}

fn count_overlaps<'s>(segments: impl Iterator<Item = &'s Segment>) -> usize {
    let mut covered: HashMap<(i32, i32), u32> = HashMap::new();
    for point in segments.flat_map(Segment::points) {
        *covered.entry(point).or_insert(0) += 1;
    }
    covered.values().filter(|&&n| n >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(segments: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(segments.iter().filter(|s| s.is_axis_aligned())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(segments: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(segments.iter()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day05.txt");

    #[test]
    fn axis_aligned_overlaps() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "5");
    }

    #[test]
    fn overlaps_with_diagonals() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "12");
    }

    #[test]
    fn diagonal_points_run_from_start_to_end() {
        let segment = Segment {
            from: (9, 7),
            to: (7, 9),
        };
        assert_eq!(
            segment.points().collect::<Vec<_>>(),
            vec![(9, 7), (8, 8), (7, 9)]
        );
    }

    #[test]
    fn rejects_skewed_segment() {
        assert!(Solver::parse("0,0 -> 1,3").is_err());
    }
}
