//! Output formatting for solver results

use crate::aggregator::ResultKey;
use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;
use std::time::Instant;

/// What to print for one result and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Goes to stdout
    Answer(String),
    /// Goes to stderr
    Error(String),
}

pub struct OutputFormatter {
    timings: bool,
    /// Prefix each line with `YYYY/DD` when several days are shown
    show_day: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(timings: bool, show_day: bool) -> Self {
        Self {
            timings,
            show_day,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match self.render(result) {
            Rendered::Answer(text) => println!("{}", text),
            Rendered::Error(text) => eprintln!("{}", text),
        }
    }

    fn label(&self, result: &SolverResult) -> String {
        if self.show_day {
            format!("{}/{:02} part{}:", result.year, result.day, result.part)
        } else {
            format!("part{}:", result.part)
        }
    }

    fn timing(&self, result: &SolverResult) -> String {
        if !self.timings {
            return String::new();
        }
        let parse = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        format!(" ({}solve: {})", parse, format_duration(result.solve_duration))
    }

    /// Render one result. Multi-line answers start on the line after the
    /// label.
    pub fn render(&self, result: &SolverResult) -> Rendered {
        let label = self.label(result);
        match &result.answer {
            Ok(answer) if answer.contains('\n') => {
                Rendered::Answer(format!("{}{}\n{}", label, self.timing(result), answer))
            }
            Ok(answer) => Rendered::Answer(format!("{} {}{}", label, answer, self.timing(result))),
            Err(e) => Rendered::Error(format!("{} error: {}", label, e)),
        }
    }

    /// Print totals after all results; only shown with timings enabled
    pub fn print_summary(&self, results: &[SolverResult]) {
        if !self.timings {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        if failures > 0 {
            println!("Failed: {}", failed_keys(results));
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!(
                "Speedup factor: {:.2}x",
                total_compute_secs / elapsed_time.as_secs_f64()
            );
        }
    }
}

/// `2021/05 part2, 2021/09 part1` style list of failed parts
fn failed_keys(results: &[SolverResult]) -> String {
    results
        .iter()
        .filter(|r| r.answer.is_err())
        .map(ResultKey::from)
        .sorted()
        .map(|k| format!("{}/{:02} part{}", k.year, k.day, k.part))
        .join(", ")
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Wall-clock counterpart of [`format_duration`]
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}
