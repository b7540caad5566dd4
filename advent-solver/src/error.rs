//! Error types for parsing, solving and registering puzzles

use thiserror::Error;

/// Error raised while turning raw puzzle input into a solver's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not have the overall layout the puzzle expects
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A single line could not be parsed (lines are 1-based)
    #[error("Invalid input on line {line}: {message}")]
    InvalidLine { line: usize, message: String },
    /// A section the puzzle requires is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Anything else
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Build an [`ParseError::InvalidLine`] from a zero-based line index
    pub fn at_line(index: usize, message: impl std::fmt::Display) -> Self {
        ParseError::InvalidLine {
            line: index + 1,
            message: message.to_string(),
        }
    }
}

/// Error raised while solving one part of a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part is 0 or above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but has no answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as [`SolveError::SolveFailed`]
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SolveError::SolveFailed(err.into())
    }
}

/// Error returned by registry lookups and type-erased solving
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver is registered for the year/day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day lies outside the supported range
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for the year/day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year/day lies outside the supported range
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
