//! Advent of Code solver framework
//!
//! A puzzle day is a type implementing [`AocParser`] (how to read the input)
//! and one [`PartSolver`] per part. `#[derive(AocSolver)]` combines those into
//! a [`Solver`], and `#[derive(AutoRegisterSolver)]` submits it to a global
//! plugin list that a [`SolverRegistryBuilder`] can pick up.
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Lanternfish;
//!
//! impl AocParser for Lanternfish {
//!     type SharedData<'a> = Vec<u8>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .trim()
//!             .split(',')
//!             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Lanternfish {
//!     fn solve(ages: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(ages.len().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Lanternfish {
//!     fn solve(ages: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(ages.iter().map(|&a| a as u32).sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Lanternfish>(2021, 6)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 6, "3,4,3,1,2").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "5");
//! assert_eq!(solver.solve(2).unwrap().answer, "13");
//! ```
//!
//! Parts of one day share the same parsed data through a `&mut` borrow, so a
//! day can memoise work that both parts need inside its `SharedData`.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macros expand to `::advent_solver::inventory::submit!`
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};
