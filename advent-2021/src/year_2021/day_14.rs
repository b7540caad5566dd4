//! Day 14: Extended Polymerization

use std::collections::HashMap;

use anyhow::{anyhow, ensure};
use itertools::{Itertools, MinMaxResult};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 14, tags = ["2021", "counting"])]
pub struct Solver;

type Pair = (u8, u8);

#[derive(Debug)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<Pair, u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (template, rules) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("insertion rules".into()))?;

        let template = template.trim().as_bytes().to_vec();
        if template.is_empty() {
            return Err(ParseError::MissingData("polymer template".into()));
        }

        let rules = parse_lines(rules, |line| {
            let (pair, insert) = line
                .split_once(" -> ")
                .ok_or_else(|| anyhow!("expected `AB -> C`"))?;
            ensure!(pair.len() == 2 && insert.len() == 1, "malformed rule");
            let pair = pair.as_bytes();
            Ok(((pair[0], pair[1]), insert.as_bytes()[0]))
        })?
        .into_iter()
        .collect();

        Ok(Polymer { template, rules })
    }
}

/// Most common minus least common element count after `steps` insertions.
///
/// Only pair counts are tracked; each element is counted as the first half of
/// a pair, plus the template's final element which never starts one.
fn spread_after(polymer: &Polymer, steps: usize) -> u64 {
    let mut pairs: HashMap<Pair, u64> = HashMap::new();
    for (&a, &b) in polymer.template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_insert(0) += 1;
    }

    for _ in 0..steps {
        let mut next = HashMap::with_capacity(pairs.len());
        for ((a, b), count) in pairs {
            match polymer.rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_insert(0) += count;
                    *next.entry((c, b)).or_insert(0) += count;
                }
                None => *next.entry((a, b)).or_insert(0) += count,
            }
        }
        pairs = next;
    }

    let mut elements: HashMap<u8, u64> = HashMap::new();
    for ((a, _), count) in pairs {
        *elements.entry(a).or_insert(0) += count;
    }
    if let Some(&last) = polymer.template.last() {
        *elements.entry(last).or_insert(0) += 1;
    }

    match elements.values().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0,
    }
}

impl PartSolver<1> for Solver {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(polymer, 10).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(polymer, 40).to_string())
    }
}
