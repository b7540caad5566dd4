//! Day 22: Reactor Reboot

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use anyhow::{anyhow, ensure};
use regex::Regex;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 22, tags = ["2021", "geometry", "interval"])]
pub struct Solver;

/// Part 1 only considers steps inside `-INIT_BOUND..=INIT_BOUND` on every axis
const INIT_BOUND: i64 = 50;

static STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(on|off) x=(-?\d+)\.\.(-?\d+),y=(-?\d+)\.\.(-?\d+),z=(-?\d+)\.\.(-?\d+)$")
        .expect("step pattern is valid")
});

/// Axis-aligned box of unit cubes, bounds inclusive on every axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pub x: (i64, i64),
    pub y: (i64, i64),
    pub z: (i64, i64),
}

fn span((lo, hi): (i64, i64)) -> RangeInclusive<i64> {
    lo..=hi
}

impl Cuboid {
    pub fn volume(&self) -> u64 {
        [self.x, self.y, self.z]
            .iter()
            .map(|&(lo, hi)| (hi - lo + 1) as u64)
            .product()
    }

    pub fn overlaps(&self, other: &Cuboid) -> bool {
        [(self.x, other.x), (self.y, other.y), (self.z, other.z)]
            .iter()
            .all(|&(a, b)| a.0 <= b.1 && b.0 <= a.1)
    }

    /// Whether `other` lies entirely inside `self`
    pub fn envelops(&self, other: &Cuboid) -> bool {
        [(self.x, other.x), (self.y, other.y), (self.z, other.z)]
            .iter()
            .all(|&(a, b)| span(a).contains(&b.0) && span(a).contains(&b.1))
    }

    pub fn intersection(&self, other: &Cuboid) -> Option<Cuboid> {
        self.overlaps(other).then(|| Cuboid {
            x: (self.x.0.max(other.x.0), self.x.1.min(other.x.1)),
            y: (self.y.0.max(other.y.0), self.y.1.min(other.y.1)),
            z: (self.z.0.max(other.z.0), self.z.1.min(other.z.1)),
        })
    }

    /// Split `self` into at most six disjoint cuboids covering exactly the
    /// cubes of `self` that are not in `other`.
    ///
    /// Slabs are cut off along x first, then y, then z; each cut shrinks the
    /// remainder towards the intersection, which is discarded at the end.
    pub fn without(&self, other: &Cuboid) -> Vec<Cuboid> {
        if !self.overlaps(other) {
            return vec![*self];
        }
        let mut pieces = Vec::with_capacity(6);
        let mut rest = *self;

        if rest.x.0 < other.x.0 {
            pieces.push(Cuboid { x: (rest.x.0, other.x.0 - 1), ..rest });
            rest.x.0 = other.x.0;
        }
        if rest.x.1 > other.x.1 {
            pieces.push(Cuboid { x: (other.x.1 + 1, rest.x.1), ..rest });
            rest.x.1 = other.x.1;
        }
        if rest.y.0 < other.y.0 {
            pieces.push(Cuboid { y: (rest.y.0, other.y.0 - 1), ..rest });
            rest.y.0 = other.y.0;
        }
        if rest.y.1 > other.y.1 {
            pieces.push(Cuboid { y: (other.y.1 + 1, rest.y.1), ..rest });
            rest.y.1 = other.y.1;
        }
        if rest.z.0 < other.z.0 {
            pieces.push(Cuboid { z: (rest.z.0, other.z.0 - 1), ..rest });
        }
        if rest.z.1 > other.z.1 {
            pieces.push(Cuboid { z: (other.z.1 + 1, rest.z.1), ..rest });
        }
        pieces
    }

    fn within(&self, bound: i64) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|&(lo, hi)| lo >= -bound && hi <= bound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub on: bool,
    pub cuboid: Cuboid,
}

/// Lit region kept as pairwise disjoint cuboids
#[derive(Debug, Default)]
pub struct Reactor {
    lit: Vec<Cuboid>,
}

impl Reactor {
    pub fn apply(&mut self, step: &Step) {
        if step.on {
            let mut pieces = vec![step.cuboid];
            for existing in &self.lit {
                pieces = pieces
                    .into_iter()
                    .flat_map(|piece| {
                        if existing.envelops(&piece) {
                            Vec::new()
                        } else {
                            piece.without(existing)
                        }
                    })
                    .collect();
                if pieces.is_empty() {
                    break;
                }
            }
            self.lit.extend(pieces);
        } else {
            self.lit = self
                .lit
                .iter()
                .flat_map(|existing| existing.without(&step.cuboid))
                .collect();
        }
    }

    pub fn lit_volume(&self) -> u64 {
        self.lit.iter().map(Cuboid::volume).sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let caps = STEP
                .captures(line)
                .ok_or_else(|| anyhow!("expected `on|off x=A..B,y=C..D,z=E..F`"))?;
            let n = |i: usize| caps[i].parse::<i64>();
            let axis = |lo: i64, hi: i64| -> anyhow::Result<(i64, i64)> {
                ensure!(lo <= hi, "range {}..{} is reversed", lo, hi);
                Ok((lo, hi))
            };
            Ok(Step {
                on: &caps[1] == "on",
                cuboid: Cuboid {
                    x: axis(n(2)?, n(3)?)?,
                    y: axis(n(4)?, n(5)?)?,
                    z: axis(n(6)?, n(7)?)?,
                },
            })
        })
    }
}

fn lit_after<'s>(steps: impl Iterator<Item = &'s Step>) -> u64 {
    let mut reactor = Reactor::default();
    for step in steps {
        reactor.apply(step);
    }
    reactor.lit_volume()
}

impl PartSolver<1> for Solver {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = lit_after(steps.iter().filter(|s| s.cuboid.within(INIT_BOUND)));
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_after(steps.iter()).to_string())
    }
}
