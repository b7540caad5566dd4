//! Helpers shared by several puzzle days

pub mod grid;

pub use grid::Grid;
