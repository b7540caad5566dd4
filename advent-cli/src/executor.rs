//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Outcome of one part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Time spent parsing the instance that solved this part
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// One registered day selected to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// The part of the executor shared by reference with worker threads
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone())
                    .with_file(config.input_file.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Parts of a day with `max_parts` parts that pass the part filter
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send one result per part to `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        tracing::info!(
            items = work_items.len(),
            mode = ?self.sync_executor_config.parallelize_by,
            "executing"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items on the thread pool, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map_with(tx.clone(), |tx, work| {
                    run_work(&work, tx, sync_executor_config).err()
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
                    (e1, e2) => e1.or(e2),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Build an error result for `part`
fn error_result(work: &WorkItem, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Send the same error as the result of every part of `work`
fn send_failure(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(error_result(work, part, error.clone()))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Read the input of one work item and solve its parts.
///
/// An unreadable input is reported as a failed result for each part rather
/// than as an executor error.
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    tracing::info!(year, day, parts = ?work.parts, "running");

    let input = match sync_executor_config.inputs.read(day) {
        Ok(input) => input,
        Err(source) => {
            tracing::warn!(year, day, error = %source, "input unavailable");
            let error = ExecutorError::Input { year, day, source }.into();
            return send_failure(work, error, tx);
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_parts_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Solve every part concurrently, each on its own freshly parsed instance
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    work.parts
        .clone()
        .into_par_iter()
        .map_with(tx.clone(), |tx, part| {
            let result = match registry.create_solver(work.year, work.day, input) {
                Ok(mut solver) => solve_part(work, part, &mut *solver),
                Err(e) => error_result(work, part, ExecutorError::Solver(e).into()),
            };
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
        })
        .collect::<Result<(), _>>()
}

/// Parse once and solve the parts in order on that instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => {
            tracing::warn!(year = work.year, day = work.day, error = %e, "parse failed");
            return send_failure(work, ExecutorError::Solver(e).into(), tx);
        }
    };

    for part in work.parts.clone() {
        tx.send(solve_part(work, part, &mut *solver))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year: work.year,
            day: work.day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..error_result(
                work,
                part,
                ExecutorError::Solver(advent_solver::SolverError::SolveError(e)).into(),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use advent_solver::SolverRegistryBuilder;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(dir: &Path, argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied()))
            .unwrap();
        let mut config = Config::resolve(args, None).unwrap();
        config.input_dir = dir.to_path_buf();
        config
    }

    fn executor(dir: &Path, argv: &[&str]) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        Executor::new(registry, &config(dir, argv)).unwrap()
    }

    fn run(executor: Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn answers(results: &[SolverResult]) -> Vec<(u8, u8, String)> {
        results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_ref().unwrap().clone()))
            .collect()
    }

    #[test]
    fn filters_by_day_and_part() {
        let temp = TempDir::new().unwrap();
        let all = executor(temp.path(), &[]).collect_work_items();
        assert!(all.len() >= 21);
        assert!(all.iter().any(|w| w.day == 25 && w.parts == (1..=1)));

        let items = executor(temp.path(), &["-d", "6", "-p", "2"]).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2021,
                day: 6,
                parts: 2..=2
            }]
        );

        // Day 25 has no second part
        assert!(executor(temp.path(), &["-d", "25", "-p", "2"])
            .collect_work_items()
            .is_empty());
    }

    #[test]
    fn every_mode_produces_the_same_answers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day06.txt"), "3,4,3,1,2\n").unwrap();
        fs::write(temp.path().join("day07.txt"), "16,1,2,0,4,2,7,1,2,14\n").unwrap();

        let expected = vec![
            (6, 1, "5934".to_string()),
            (6, 2, "26984457539".to_string()),
            (7, 1, "37".to_string()),
            (7, 2, "168".to_string()),
        ];
        for mode in ["sequential", "day", "part"] {
            let results = run(executor(
                temp.path(),
                &["-y", "2021", "--threads", "2", "--parallelize-by", mode],
            ));
            let solved: Vec<_> = results.into_iter().filter(|r| r.answer.is_ok()).collect();
            assert_eq!(answers(&solved), expected, "mode {}", mode);
        }
    }

    #[test]
    fn missing_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        let results = run(executor(temp.path(), &["-d", "3"]));
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Input { day: 3, .. }));
        }
    }

    #[test]
    fn malformed_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day01.txt"), "one\ntwo\n").unwrap();
        for mode in ["day", "part"] {
            let results = run(executor(temp.path(), &["-d", "1", "--parallelize-by", mode]));
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| matches!(
                r.answer.as_ref().map_err(|e| e.inner()),
                Err(ExecutorError::Solver(_))
            )));
        }
    }

    #[test]
    fn explicit_file_feeds_the_selected_day() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("dive.txt");
        fs::write(&file, "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n").unwrap();

        let mut config = config(temp.path(), &["-d", "2"]);
        config.input_file = Some(file);
        let registry = SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        let results = run(Executor::new(registry, &config).unwrap());
        assert_eq!(
            answers(&results),
            vec![(2, 1, "150".to_string()), (2, 2, "900".to_string())]
        );
        assert!(results.iter().all(|r| r.parse_duration.is_some()));
    }
}
