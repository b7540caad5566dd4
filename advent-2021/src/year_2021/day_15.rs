//! Day 15: Chiton

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["2021", "grid", "shortest-path"])]
pub struct Solver;

const TILES: usize = 5;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let risk = Grid::parse_digits(input)?;
        if risk.iter().any(|&r| r == 0) {
            return Err(ParseError::InvalidFormat("risk levels must be 1..=9".into()));
        }
        Ok(risk)
    }
}

/// Lowest total risk from the top-left to the bottom-right corner.
///
/// Dijkstra with a min-heap; entering a cell costs its risk and the start
/// cell is free.
fn lowest_risk(risk: &Grid<u8>) -> Option<u32> {
    let goal = (risk.height() - 1, risk.width() - 1);
    let mut best = Grid::from_fn(risk.width(), risk.height(), |_| u32::MAX);
    let mut queue = BinaryHeap::new();

    best[(0, 0)] = 0;
    queue.push(Reverse((0u32, (0usize, 0usize))));

    while let Some(Reverse((total, pos))) = queue.pop() {
        if pos == goal {
            return Some(total);
        }
        if total > best[pos] {
            continue;
        }
        for next in risk.neighbors4(pos) {
            let candidate = total + risk[next] as u32;
            if candidate < best[next] {
                best[next] = candidate;
                queue.push(Reverse((candidate, next)));
            }
        }
    }
    None
}

/// The map repeated 5x5 times, each tile one riskier per step right or down,
/// wrapping from 9 back to 1.
fn tiled(risk: &Grid<u8>) -> Grid<u8> {
    let (w, h) = (risk.width(), risk.height());
    Grid::from_fn(w * TILES, h * TILES, |(row, col)| {
        let base = risk[(row % h, col % w)] as usize;
        let shift = row / h + col / w;
        (1 + (base + shift - 1) % 9) as u8
    })
}

impl PartSolver<1> for Solver {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(risk)
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::failed("bottom-right corner is unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(risk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(&tiled(risk))
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::failed("bottom-right corner is unreachable"))
    }
}
