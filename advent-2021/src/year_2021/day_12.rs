//! Day 12: Passage Pathing

use std::collections::HashMap;

use anyhow::{anyhow, ensure};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["2021", "graph"])]
pub struct Solver;

/// Visited small caves are tracked in a `u64` bitmask
const MAX_CAVES: usize = 64;

#[derive(Debug)]
pub struct CaveSystem<'a> {
    names: Vec<&'a str>,
    small: Vec<bool>,
    /// Passages, never leading back into `start`
    exits: Vec<Vec<usize>>,
    start: usize,
    end: usize,
}

impl<'a> CaveSystem<'a> {
    fn id(&mut self, name: &'a str) -> anyhow::Result<usize> {
        if let Some(id) = self.names.iter().position(|&n| n == name) {
            return Ok(id);
        }
        ensure!(self.names.len() < MAX_CAVES, "more than {} caves", MAX_CAVES);
        self.names.push(name);
        self.small.push(name.chars().all(|c| c.is_ascii_lowercase()));
        self.exits.push(Vec::new());
        Ok(self.names.len() - 1)
    }

    /// Count paths from `start` to `end` with an explicit work stack.
    ///
    /// Small caves may be entered once, except that with `allow_revisit` a
    /// single small cave per path may be entered a second time.
    fn count_paths(&self, allow_revisit: bool) -> usize {
        let mut stack = vec![(self.start, 1u64 << self.start, !allow_revisit)];
        let mut paths = 0;

        while let Some((cave, seen, revisit_used)) = stack.pop() {
            if cave == self.end {
                paths += 1;
                continue;
            }
            for &next in &self.exits[cave] {
                let bit = 1u64 << next;
                if !self.small[next] {
                    stack.push((next, seen, revisit_used));
                } else if seen & bit == 0 {
                    stack.push((next, seen | bit, revisit_used));
                } else if !revisit_used && next != self.end {
                    stack.push((next, seen, true));
                }
            }
        }
        paths
    }
}

impl AocParser for Solver {
    type SharedData<'a> = CaveSystem<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut caves = CaveSystem {
            names: Vec::new(),
            small: Vec::new(),
            exits: Vec::new(),
            start: 0,
            end: 0,
        };
        let passages = parse_lines(input, |line| {
            let (a, b) = line
                .split_once('-')
                .ok_or_else(|| anyhow!("expected `a-b`"))?;
            Ok((caves.id(a)?, caves.id(b)?))
        })?;

        let find = |name: &str| {
            caves
                .names
                .iter()
                .position(|&n| n == name)
                .ok_or_else(|| ParseError::MissingData(format!("no `{}` cave", name)))
        };
        caves.start = find("start")?;
        caves.end = find("end")?;

        let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
        for (a, b) in passages {
            if a == b {
                continue;
            }
            if b != caves.start && a != caves.end {
                adjacency.entry(a).or_default().push(b);
            }
            if a != caves.start && b != caves.end {
                adjacency.entry(b).or_default().push(a);
            }
        }
        for (cave, exits) in adjacency {
            caves.exits[cave] = exits;
        }

        if let Some(cave) = (0..caves.names.len()).find(|&c| {
            !caves.small[c] && caves.exits[c].iter().any(|&n| !caves.small[n])
        }) {
            return Err(ParseError::InvalidFormat(format!(
                "big cave {} connects to another big cave, paths are unbounded",
                caves.names[cave]
            )));
        }
        Ok(caves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(caves.count_paths(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(caves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(caves.count_paths(true).to_string())
    }
}
