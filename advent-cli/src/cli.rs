//! Command line arguments

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How much of the work runs concurrently
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every day and part in order on the calling thread
    Sequential,
    /// Run days concurrently; the parts of one day share a parsed input (default)
    #[default]
    Day,
    /// Run every part concurrently, each on its own freshly parsed input
    Part,
}

/// Advent of Code 2021 solution runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code 2021 solutions", version)]
pub struct Args {
    /// Day to run (runs every registered day if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs every part if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file to use instead of `<input-dir>/dayNN.txt`; needs --day
    #[arg(short, long)]
    pub filename: Option<PathBuf>,

    /// Year to run
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Directory holding `dayNN.txt` inputs [default: $AOC_INPUT_DIR or .]
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Only run solutions carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Print parse and solve timings and a summary
    #[arg(long)]
    pub timings: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
