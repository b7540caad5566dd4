//! Day 8: Seven Segment Search

use anyhow::{anyhow, bail, ensure};

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["2021", "deduction"])]
pub struct Solver;

/// Lit segments `a..=g` as bits 0..=6
type Segments = u8;

#[derive(Debug)]
pub struct Display {
    patterns: [Segments; 10],
    outputs: [Segments; 4],
}

fn segments(word: &str) -> anyhow::Result<Segments> {
    word.bytes().try_fold(0, |mask, b| match b {
        b'a'..=b'g' => Ok(mask | 1 << (b - b'a')),
        _ => bail!("invalid segment {:?}", b as char),
    })
}

fn words<const N: usize>(part: &str) -> anyhow::Result<[Segments; N]> {
    let masks = part
        .split_whitespace()
        .map(segments)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let len = masks.len();
    masks
        .try_into()
        .map_err(|_| anyhow!("expected {} patterns, found {}", N, len))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Display>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (patterns, outputs) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("missing `|` separator"))?;
            Ok(Display {
                patterns: words(patterns)?,
                outputs: words(outputs)?,
            })
        })
    }
}

fn lit(mask: Segments) -> u32 {
    mask.count_ones()
}

impl Display {
    /// Work out which pattern renders which digit.
    ///
    /// Digits 1, 4, 7 and 8 have unique segment counts; the remaining six
    /// follow from how they overlap with 1 and 4.
    fn wiring(&self) -> anyhow::Result<[Segments; 10]> {
        let unique = |count| {
            self.patterns
                .iter()
                .copied()
                .find(|&p| lit(p) == count)
                .ok_or_else(|| anyhow!("no pattern with {} segments", count))
        };
        let one = unique(2)?;
        let four = unique(4)?;

        let mut digits = [None; 10];
        for &pattern in &self.patterns {
            let digit = match lit(pattern) {
                2 => 1,
                3 => 7,
                4 => 4,
                7 => 8,
                6 if pattern & four == four => 9,
                6 if pattern & one == one => 0,
                6 => 6,
                5 if pattern & one == one => 3,
                5 if lit(pattern & four) == 3 => 5,
                5 => 2,
                n => bail!("pattern with {} segments", n),
            };
            ensure!(digits[digit].is_none(), "digit {} appears twice", digit);
            digits[digit] = Some(pattern);
        }

        let mut wiring = [0; 10];
        for (digit, pattern) in digits.into_iter().enumerate() {
            wiring[digit] = pattern.ok_or_else(|| anyhow!("digit {} not found", digit))?;
        }
        Ok(wiring)
    }

    fn value(&self) -> anyhow::Result<u32> {
        let wiring = self.wiring()?;
        self.outputs.iter().try_fold(0, |value, output| {
            let digit = wiring
                .iter()
                .position(|p| p == output)
                .ok_or_else(|| anyhow!("output pattern matches no digit"))?;
            Ok(value * 10 + digit as u32)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(displays: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = displays
            .iter()
            .flat_map(|d| d.outputs)
            .filter(|&o| matches!(lit(o), 2 | 3 | 4 | 7))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(displays: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        displays
            .iter()
            .try_fold(0u64, |sum, display| -> anyhow::Result<u64> {
                Ok(sum + display.value()? as u64)
            })
            .map(|sum| sum.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_2021::test_util::solve;

    const SAMPLE: &str = include_str!("../../samples/day08.txt");

    const SINGLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

    #[test]
    fn counts_unique_length_outputs() {
        assert_eq!(solve::<Solver>(SAMPLE, 1), "26");
        assert_eq!(solve::<Solver>(SINGLE, 1), "0");
    }

    #[test]
    fn decodes_single_entry() {
        let displays = Solver::parse(SINGLE).unwrap();
        assert_eq!(displays[0].value().unwrap(), 5353);
    }

    #[test]
    fn decodes_outputs() {
        let displays = Solver::parse(SAMPLE).unwrap();
        let values: Vec<u32> = displays.iter().map(|d| d.value().unwrap()).collect();
        assert_eq!(
            values,
            [8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315]
        );
        assert_eq!(solve::<Solver>(SAMPLE, 2), "61229");
    }

    #[test]
    fn rejects_wrong_output_count() {
        let line = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb";
        assert!(Solver::parse(line).is_err());
    }
}
