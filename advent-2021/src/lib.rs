//! Advent of Code 2021 puzzle solutions
//!
//! Every day is a `Solver` submitted to the advent-solver plugin list through
//! `#[derive(AutoRegisterSolver)]`; linking this crate is enough for a
//! `SolverRegistryBuilder::register_all_plugins` call to find them.

pub mod utils;

#[cfg(feature = "year-2021")]
pub mod year_2021;
