//! Day 11: Dumbo Octopus

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["2021", "grid", "flood-fill"])]
pub struct Solver;

const FLASH_LEVEL: u8 = 9;

/// Give up looking for a synchronised flash after this many steps
const STEP_LIMIT: usize = 10_000;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_digits(input)
    }
}

/// Advance one step in place and return how many octopuses flashed.
///
/// Flashes spread through an explicit stack; an octopus flashes at most once
/// per step and is reset to 0 afterwards.
fn step(energy: &mut Grid<u8>) -> usize {
    let mut flashing = Vec::new();
    for pos in energy.positions() {
        energy[pos] += 1;
        if energy[pos] == FLASH_LEVEL + 1 {
            flashing.push(pos);
        }
    }

    let mut flashed = 0;
    while let Some(pos) = flashing.pop() {
        flashed += 1;
        for next in energy.neighbors8(pos) {
            if energy[next] <= FLASH_LEVEL {
                energy[next] += 1;
                if energy[next] == FLASH_LEVEL + 1 {
                    flashing.push(next);
                }
            }
        }
    }

    for level in energy.iter_mut() {
        if *level > FLASH_LEVEL {
            *level = 0;
        }
    }
    flashed
}

impl PartSolver<1> for Solver {
    fn solve(energy: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = energy.clone();
        let flashes: usize = (0..100).map(|_| step(&mut energy)).sum();
        Ok(flashes.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(energy: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = energy.clone();
        (1..=STEP_LIMIT)
            .find(|_| step(&mut energy) == energy.len())
            .map(|n| n.to_string())
            .ok_or_else(|| {
                SolveError::failed(format!("no synchronised flash within {} steps", STEP_LIMIT))
            })
    }
}
