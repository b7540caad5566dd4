//! Day 10: Syntax Scoring

use anyhow::{anyhow, ensure};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["2021", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// First closing character that does not match its opener
    Corrupted(char),
    /// Closers needed to finish the line, innermost first
    Incomplete(Vec<char>),
}

fn closer(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> anyhow::Result<Line> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
            continue;
        }
        ensure!(matches!(c, ')' | ']' | '}' | '>'), "unexpected character {:?}", c);
        if expected.pop() != Some(c) {
            return Ok(Line::Corrupted(c));
        }
    }
    expected.reverse();
    Ok(Line::Incomplete(expected))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Line>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, check)
    }
}

impl PartSolver<1> for Solver {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = lines
            .iter()
            .filter_map(|line| match line {
                Line::Corrupted(')') => Some(3),
                Line::Corrupted(']') => Some(57),
                Line::Corrupted('}') => Some(1197),
                Line::Corrupted('>') => Some(25137),
                _ => None,
            })
            .sum();
        Ok(score.to_string())
    }
}

fn completion_score(closers: &[char]) -> u64 {
    closers.iter().fold(0, |score, c| {
        let points = match c {
            ')' => 1,
            ']' => 2,
            '}' => 3,
            _ => 4,
        };
        score * 5 + points
    })
}

impl PartSolver<2> for Solver {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = lines
            .iter()
            .filter_map(|line| match line {
                Line::Incomplete(closers) if !closers.is_empty() => Some(completion_score(closers)),
                _ => None,
            })
            .collect();
        if scores.is_empty() {
            return Err(SolveError::failed(anyhow!("no incomplete lines")));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}
