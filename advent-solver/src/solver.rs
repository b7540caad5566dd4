//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part of a day.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, l)| l.trim().parse().map_err(|e| ParseError::at_line(i, e)))
///             .collect()
///     }
/// }
///
/// assert_eq!(SonarSweep::parse("199\n200\n").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to memoise between them.
    ///
    /// The lifetime lets a day borrow from the raw input instead of copying.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// `#[derive(AocSolver)]` stitches the `PartSolver` impls of a type into a
/// [`Solver`] impl.
///
/// ```
/// use advent_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct SonarSweep;
///
/// impl AocParser for SonarSweep {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad depth".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for SonarSweep {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = SonarSweep::parse("1\n3\n2\n4").unwrap();
/// assert_eq!(<SonarSweep as PartSolver<1>>::solve(&mut depths).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: a parser plus `PARTS` numbered parts.
///
/// Usually derived, but it can be written by hand:
///
/// ```
/// use advent_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Dive;
///
/// impl AocParser for Dive {
///     type SharedData<'a> = Vec<(&'a str, i64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (dir, n) = line
///                     .split_once(' ')
///                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
///                 let n = n.parse().map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
///                 Ok((dir, n))
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Dive {
///     const PARTS: u8 = 1;
///
///     fn solve_part(moves: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 let forward: i64 = moves.iter().filter(|m| m.0 == "forward").map(|m| m.1).sum();
///                 Ok(forward.to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut moves = Dive::parse("forward 5\ndown 2\nforward 3").unwrap();
/// assert_eq!(Dive::solve_part(&mut moves, 1).unwrap(), "8");
/// ```
pub trait Solver: AocParser {
    /// Number of parts, numbered from 1
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
