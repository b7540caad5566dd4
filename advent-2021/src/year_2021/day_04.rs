//! Day 4: Giant Squid

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::anyhow;

use super::parse_csv;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "simulation"])]
pub struct Solver;

const SIZE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: [u32; SIZE * SIZE],
    marked: [bool; SIZE * SIZE],
}

impl Board {
    fn mark(&mut self, drawn: u32) -> bool {
        let Some(index) = self.numbers.iter().position(|&n| n == drawn) else {
            return false;
        };
        self.marked[index] = true;
        let (row, col) = (index / SIZE, index % SIZE);
        (0..SIZE).all(|c| self.marked[row * SIZE + c]) || (0..SIZE).all(|r| self.marked[r * SIZE + col])
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(self.marked)
            .filter(|(_, marked)| !marked)
            .map(|(n, _)| n)
            .sum()
    }
}

#[derive(Debug)]
pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
    scores: Option<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let mut sections = input.trim().split("\n\n");
        let draws = parse_csv(
            sections
                .next()
                .ok_or_else(|| ParseError::MissingData("draw order".into()))?,
        )?;

        let boards = sections
            .enumerate()
            .map(|(index, section)| {
                let numbers: Vec<u32> = section
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .map_err(|e| anyhow!("board {}: {}", index + 1, e))?;
                let numbers: [u32; SIZE * SIZE] = numbers.try_into().map_err(|v: Vec<u32>| {
                    anyhow!("board {} has {} numbers, expected {}", index + 1, v.len(), SIZE * SIZE)
                })?;
                Ok(Board {
                    numbers,
                    marked: [false; SIZE * SIZE],
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards".into()));
        }
        Ok(Game {
            draws,
            boards,
            scores: None,
        })
    }
}

/// Scores of every board that eventually wins, in the order they win
fn winning_scores(game: &mut Game) -> &[u32] {
    game.scores.get_or_insert_with(|| {
        let mut boards = game.boards.clone();
        let mut won = vec![false; boards.len()];
        let mut scores = Vec::with_capacity(boards.len());
        for &drawn in &game.draws {
            for (board, won) in boards.iter_mut().zip(won.iter_mut()) {
                if !*won && board.mark(drawn) {
                    *won = true;
                    scores.push(board.unmarked_sum() * drawn);
                }
            }
        }
        scores
    })
}

impl PartSolver<1> for Solver {
    fn solve(game: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(game)
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board ever wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(game: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(game)
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board ever wins"))
    }
}
