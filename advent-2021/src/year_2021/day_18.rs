//! Day 18: Snailfish
//!
//! A snailfish number is stored flat, as its regular numbers from left to
//! right, each tagged with how many pairs enclose it. Exploding and
//! splitting then become local edits of the list, and the magnitude is
//! folded back together with a stack.

use anyhow::{Context, bail, ensure};
use itertools::Itertools;

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 18, tags = ["2021", "parsing"])]
pub struct Solver;

const EXPLODE_DEPTH: u8 = 5;
const SPLIT_AT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regular {
    value: u64,
    depth: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number(Vec<Regular>);

impl Number {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let mut regulars = Vec::new();
        let mut depth = 0u8;
        let mut digits = line.char_indices().peekable();
        while let Some((_, c)) = digits.next() {
            match c {
                '[' => {
                    depth += 1;
                    ensure!(depth < EXPLODE_DEPTH, "nested more than four pairs deep");
                }
                ']' => {
                    ensure!(depth > 0, "unbalanced `]`");
                    depth -= 1;
                }
                ',' => {}
                '0'..='9' => {
                    let mut value = u64::from(c.to_digit(10).unwrap_or_default());
                    while let Some(d) = digits.peek().and_then(|&(_, c)| c.to_digit(10)) {
                        value = value
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(u64::from(d)))
                            .context("regular number too large")?;
                        digits.next();
                    }
                    ensure!(value < SPLIT_AT, "regular number {} is not reduced", value);
                    regulars.push(Regular { value, depth });
                }
                other => bail!("unexpected character {:?}", other),
            }
        }
        ensure!(depth == 0, "unbalanced `[`");

        let number = Number(regulars);
        ensure!(number.is_well_formed(), "not a pair of pairs and regular numbers");
        Ok(number)
    }

    /// Collapse the list into a single regular number, combining the two
    /// halves of every innermost pair with `combine`.
    fn collapse(&self, combine: impl Fn(u64, u64) -> u64) -> Option<u64> {
        let mut stack: Vec<(u64, u8)> = Vec::with_capacity(self.0.len());
        for r in &self.0 {
            stack.push((r.value, r.depth));
            while let [.., (left, dl), (right, dr)] = stack[..] {
                if dl != dr || dl == 0 {
                    break;
                }
                stack.truncate(stack.len() - 2);
                stack.push((combine(left, right), dl - 1));
            }
        }
        match stack[..] {
            [(value, 0)] => Some(value),
            _ => None,
        }
    }

    fn is_well_formed(&self) -> bool {
        self.0.iter().all(|r| r.depth > 0) && self.collapse(|_, _| 0).is_some()
    }

    pub fn magnitude(&self) -> u64 {
        self.collapse(|left, right| 3 * left + 2 * right)
            .unwrap_or_default()
    }

    fn explode(&mut self) -> anyhow::Result<bool> {
        let Some(i) = self.0.iter().position(|r| r.depth >= EXPLODE_DEPTH) else {
            return Ok(false);
        };
        let (left, right) = (self.0[i], self.0[i + 1]);
        if i > 0 {
            let prev = &mut self.0[i - 1];
            prev.value = prev
                .value
                .checked_add(left.value)
                .context("regular number overflowed while exploding")?;
        }
        if let Some(next) = self.0.get_mut(i + 2) {
            next.value = next
                .value
                .checked_add(right.value)
                .context("regular number overflowed while exploding")?;
        }
        self.0[i] = Regular {
            value: 0,
            depth: left.depth - 1,
        };
        self.0.remove(i + 1);
        Ok(true)
    }

    fn split(&mut self) -> bool {
        let Some(i) = self.0.iter().position(|r| r.value >= SPLIT_AT) else {
            return false;
        };
        let Regular { value, depth } = self.0[i];
        let halves = [
            Regular {
                value: value / 2,
                depth: depth + 1,
            },
            Regular {
                value: value.div_ceil(2),
                depth: depth + 1,
            },
        ];
        self.0.splice(i..=i, halves);
        true
    }

    fn reduce(&mut self) -> anyhow::Result<()> {
        while self.explode()? || self.split() {}
        Ok(())
    }

    pub fn add(&self, other: &Number) -> anyhow::Result<Number> {
        let mut sum = Number(
            self.0
                .iter()
                .chain(&other.0)
                .map(|r| Regular {
                    value: r.value,
                    depth: r.depth + 1,
                })
                .collect(),
        );
        sum.reduce()?;
        Ok(sum)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Number>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = parse_lines(input, Number::parse)?;
        if numbers.is_empty() {
            return Err(ParseError::MissingData("no snailfish numbers".into()));
        }
        Ok(numbers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (first, rest) = numbers
            .split_first()
            .ok_or_else(|| SolveError::failed("no snailfish numbers"))?;
        let total = rest
            .iter()
            .try_fold(first.clone(), |sum, n| sum.add(n))
            .map_err(SolveError::failed)?;
        Ok(total.magnitude().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut best = None;
        for pair in numbers.iter().permutations(2) {
            let magnitude = pair[0].add(pair[1]).map_err(SolveError::failed)?.magnitude();
            best = best.max(Some(magnitude));
        }
        best.map(|m| m.to_string())
            .ok_or_else(|| SolveError::failed("need at least two snailfish numbers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day18.txt");

    fn number(s: &str) -> Number {
        Number::parse(s).unwrap()
    }

    #[test]
    fn magnitudes() {
        assert_eq!(number("[[1,2],[[3,4],5]]").magnitude(), 143);
        assert_eq!(number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").magnitude(), 1384);
        assert_eq!(
            number("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]").magnitude(),
            3488
        );
    }

    #[test]
    fn single_explosion() {
        // [[[[[9,8],1],2],3],4]
        let mut n = Number(
            [(9, 5), (8, 5), (1, 4), (2, 3), (3, 2), (4, 1)]
                .into_iter()
                .map(|(value, depth)| Regular { value, depth })
                .collect(),
        );
        assert!(n.explode().unwrap());
        assert_eq!(n, number("[[[[0,9],2],3],4]"));
    }

    #[test]
    fn split_rounds_down_then_up() {
        let mut n = Number(vec![
            Regular { value: 11, depth: 1 },
            Regular { value: 1, depth: 1 },
        ]);
        assert!(n.split());
        assert_eq!(n, number("[[5,6],1]"));
    }

    #[test]
    fn addition_reduces() {
        let sum = number("[[[[4,3],4],4],[7,[[8,4],9]]]")
            .add(&number("[1,1]"))
            .unwrap();
        assert_eq!(sum, number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));
    }

    #[test]
    fn homework_sum() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "4140");
    }

    #[test]
    fn largest_pair_sum() {
        assert_eq!(solve::<Solver>(SAMPLE, 2), "3993");
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(Number::parse("[1,2,3]").is_err());
        assert!(Number::parse("[[1,2]]").is_err());
        assert!(Number::parse("[1,2").is_err());
        assert!(Number::parse("7").is_err());
        assert!(Number::parse("[[[[[9,8],1],2],3],4]").is_err());
    }

    #[test]
    fn oversized_regular_number_is_rejected() {
        assert!(Number::parse("[9999999999,1]").is_err());
        assert!(Number::parse("[99999999999999999999999,1]").is_err());
    }

    #[test]
    fn unreduced_regular_number_is_rejected() {
        assert!(Number::parse("[4000000000,4000000000]").is_err());
        assert!(Number::parse("[10,1]").is_err());
        assert!(Number::parse("[9,1]").is_ok());
    }

    #[test]
    fn explode_overflow_is_an_error() {
        let mut n = Number(
            [(1, 5), (1, 5), (u64::MAX, 4)]
                .into_iter()
                .map(|(value, depth)| Regular { value, depth })
                .collect(),
        );
        assert!(n.explode().is_err());
    }

    #[test]
    fn oversized_input_fails_to_parse() {
        assert!(Solver::parse("[9999999999,1]\n[1,1]\n").is_err());
        assert!(Solver::parse("[4000000000,4000000000]\n[1,1]\n").is_err());
    }
}
