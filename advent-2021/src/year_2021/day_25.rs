//! Day 25: Sea Cucumber

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 25, tags = ["2021", "grid", "cellular-automaton"])]
pub struct Solver;

const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    East,
    South,
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Cell>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '.' => Some(Cell::Empty),
            '>' => Some(Cell::East),
            'v' => Some(Cell::South),
            _ => None,
        })
    }
}

/// Move every cucumber of one herd that faces an empty cell, all at once.
/// Returns how many moved.
fn move_herd(floor: &mut Grid<Cell>, herd: Cell) -> usize {
    let (width, height) = (floor.width(), floor.height());
    let target = |(row, col): (usize, usize)| match herd {
        Cell::East => (row, (col + 1) % width),
        _ => ((row + 1) % height, col),
    };
    let movers: Vec<_> = floor
        .positions()
        .filter(|&pos| floor[pos] == herd && floor[target(pos)] == Cell::Empty)
        .collect();
    for &pos in &movers {
        floor[pos] = Cell::Empty;
        floor[target(pos)] = herd;
    }
    movers.len()
}

impl PartSolver<1> for Solver {
    fn solve(floor: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut floor = floor.clone();
        for step in 1..=STEP_LIMIT {
            let moved = move_herd(&mut floor, Cell::East) + move_herd(&mut floor, Cell::South);
            if moved == 0 {
                return Ok(step.to_string());
            }
        }
        Err(SolveError::failed(format!(
            "sea cucumbers still moving after {} steps",
            STEP_LIMIT
        )))
    }
}
