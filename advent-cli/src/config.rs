//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Environment variable naming the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solution must carry to run
    pub tags: Vec<String>,
    /// Directory holding `dayNN.txt`
    pub input_dir: PathBuf,
    /// Explicit input file for the selected day
    pub input_file: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub timings: bool,
    pub log_level: Level,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var_os(INPUT_DIR_ENV))
    }

    /// Build config from CLI args, with `env_input_dir` standing in for
    /// `$AOC_INPUT_DIR`
    pub fn resolve(args: Args, env_input_dir: Option<OsString>) -> Result<Self, CliError> {
        if args.filename.is_some() && args.day.is_none() {
            return Err(CliError::Config(
                "--filename can only be used together with --day".to_string(),
            ));
        }
        if args.threads == Some(0) {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        let input_dir = args
            .input_dir
            .or_else(|| env_input_dir.filter(|d| !d.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.filename.as_deref().map(expand_tilde),
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            timings: args.timings,
            log_level: log_level(args.verbose),
        })
    }
}

/// Map the number of `-v` flags to the most verbose level logged
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn filename_requires_day() {
        let err = Config::resolve(args(&["-f", "input.txt"]), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let config = Config::resolve(args(&["-f", "input.txt", "-d", "3"]), None).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("input.txt")));
        assert_eq!(config.day_filter, Some(3));
    }

    #[test]
    fn input_dir_precedence() {
        let env = Some(OsString::from("/from/env"));

        let config = Config::resolve(args(&["-i", "/from/flag"]), env.clone()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/from/flag"));

        let config = Config::resolve(args(&[]), env).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/from/env"));

        let config = Config::resolve(args(&[]), None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("."));

        let config = Config::resolve(args(&[]), Some(OsString::new())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("."));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("~")), home.join(""));
        assert_eq!(expand_tilde(Path::new("/abs/~x")), PathBuf::from("/abs/~x"));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);

        assert_eq!(Config::resolve(args(&[]), None).unwrap().log_level, Level::WARN);
        assert_eq!(Config::resolve(args(&["-vv"]), None).unwrap().log_level, Level::DEBUG);
    }

    #[test]
    fn thread_count_defaults_and_validates() {
        assert!(Config::resolve(args(&[]), None).unwrap().thread_count >= 1);
        assert_eq!(Config::resolve(args(&["--threads", "3"]), None).unwrap().thread_count, 3);
        assert!(Config::resolve(args(&["--threads", "0"]), None).is_err());
    }
}
