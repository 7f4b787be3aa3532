//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{CliError, ExecutorError};
use executor::{Executor, WorkItem};
use log::{info, warn};
use output::OutputFormatter;

fn main() {
    let config = Config::from_args(Args::parse());

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;
    info!("{} solver(s) registered", registry.len());

    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        warn!(
            "missing {} input file(s) under {}",
            missing.len(),
            config.input_dir.display()
        );
        for (year, day) in &missing {
            warn!("  - {}/day{:02}.txt", year, day);
        }
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Run the executor on a background thread and print results in order
fn run_executor(executor: Executor, work_items: &[WorkItem], quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| ExecutorError::Panicked)??;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry, keeping solvers that carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_2024_solvers() {
        let registry = build_registry(&[]).unwrap();
        for day in [6, 10, 16, 18, 20] {
            assert!(registry.contains(2024, day), "day {day}");
        }
    }

    #[test]
    fn test_tag_filter_requires_every_tag() {
        let dijkstra = build_registry(&["dijkstra".to_string()]).unwrap();
        let days: Vec<u8> = dijkstra.iter_info().map(|i| i.day).collect();
        assert_eq!(days, vec![16]);

        let both = build_registry(&["grid".to_string(), "parallel".to_string()]).unwrap();
        assert_eq!(both.iter_info().map(|i| i.day).collect::<Vec<_>>(), vec![6]);

        assert!(build_registry(&["nope".to_string()]).unwrap().is_empty());
    }
}
