//! Day 20: Trench Map

use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 20, tags = ["2021", "grid", "cellular-automaton"])]
pub struct Solver;

const RULE_LEN: usize = 512;

/// The visible window of an infinite image; every pixel outside it has the
/// `background` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Grid<bool>,
    background: bool,
}

#[derive(Debug)]
pub struct Trench {
    rule: [bool; RULE_LEN],
    image: Image,
}

fn pixel(c: char) -> Option<bool> {
    match c {
        '#' => Some(true),
        '.' => Some(false),
        _ => None,
    }
}

impl Image {
    fn get(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return self.background;
        }
        self.pixels
            .get((row as usize, col as usize))
            .copied()
            .unwrap_or(self.background)
    }

    /// Apply the rule once; the window grows by one pixel on every side.
    fn enhance(&self, rule: &[bool; RULE_LEN]) -> Image {
        let pixels = Grid::from_fn(
            self.pixels.width() + 2,
            self.pixels.height() + 2,
            |(row, col)| {
                let (row, col) = (row as isize - 1, col as isize - 1);
                let mut index = 0;
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        index = index << 1 | usize::from(self.get(row + dr, col + dc));
                    }
                }
                rule[index]
            },
        );
        let background = if self.background {
            rule[RULE_LEN - 1]
        } else {
            rule[0]
        };
        Image { pixels, background }
    }

    fn lit(&self) -> Option<usize> {
        (!self.background).then(|| self.pixels.iter().filter(|&&p| p).count())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Trench;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (rule, image) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("input image".into()))?;

        let rule: Vec<bool> = rule
            .trim()
            .chars()
            .map(|c| pixel(c).ok_or_else(|| ParseError::at_line(0, format!("unexpected {:?}", c))))
            .collect::<Result<_, _>>()?;
        let len = rule.len();
        let rule: [bool; RULE_LEN] = rule.try_into().map_err(|_| {
            ParseError::InvalidFormat(format!("rule has {} entries, expected {}", len, RULE_LEN))
        })?;

        Ok(Trench {
            rule,
            image: Image {
                pixels: Grid::parse_with(image, pixel)?,
                background: false,
            },
        })
    }
}

fn lit_after(trench: &Trench, passes: usize) -> Result<usize, SolveError> {
    let image = (0..passes).fold(trench.image.clone(), |image, _| image.enhance(&trench.rule));
    image
        .lit()
        .ok_or_else(|| SolveError::failed(format!("infinitely many pixels lit after {} passes", passes)))
}

impl PartSolver<1> for Solver {
    fn solve(trench: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_after(trench, 2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(trench: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_after(trench, 50)?.to_string())
    }
}
