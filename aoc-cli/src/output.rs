//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(_), _) => println!("{}", self.format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", self.format_result(result)),
        }
    }

    fn format_result(&self, result: &SolverResult) -> String {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) if self.quiet => answer.clone(),
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            Err(e) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print totals and the speedup over running everything back to back
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{line}");
        }
    }
}

fn summary_lines(results: &[SolverResult], elapsed: std::time::Duration) -> Vec<String> {
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = results.len() - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();

    let mut lines = vec![
        String::new(),
        "--- Summary ---".to_string(),
        format!("Parts: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ];
    if !elapsed.is_zero() {
        let compute_secs =
            (total_parse_time + total_solve_time).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        lines.push(format!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64()));
    }
    lines
}

fn format_micros(micros: i64) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_micros(-micros)),
        Some(micros) => format_micros(micros),
    }
}

fn format_std_duration(d: std::time::Duration) -> String {
    match i64::try_from(d.as_micros()) {
        Ok(micros) => format_micros(micros),
        Err(_) => "N/A".to_string(),
    }
}
