//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ExecutorError, RunError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, RunError>,
    /// Set on the first part solved from each parse
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: RunError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    state: ExecutorState,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker needs, shared read-only across the pool
struct ExecutorState {
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
            state: ExecutorState {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Registered solvers passing the year/day/part filters, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let state = &self.state;
        state
            .registry
            .iter_info()
            .filter(|info| state.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| state.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Year/day pairs among the work items with no input file
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.state.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.state.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item, sending one result per part to `tx`
    ///
    /// Results arrive in completion order; the caller re-orders them.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();
        let state = &self.state;
        let tx = &tx;
        debug!(
            "executing {} work item(s), parallelize by {:?}",
            work_items.len(),
            state.parallelize_by
        );

        match state.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_work(work, tx, state).err())
                .reduce(ExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    by_year
                        .par_iter()
                        .flat_map_iter(move |items| {
                            items.iter().filter_map(move |work| run_work(work, tx, state).err())
                        })
                        .reduce_with(ExecutorError::combine)
                        .map_or(Ok(()), Err)
                })
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .filter_map(|work| run_work(work, tx, state).err())
                    .reduce_with(ExecutorError::combine)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Read the input for one work item and solve its parts
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    state: &ExecutorState,
) -> Result<(), ExecutorError> {
    let input = match state.inputs.read(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            warn!("{e}");
            let error = RunError::from(e);
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if state.parallelize_by == ParallelizeBy::Part {
        work.parts.clone().into_par_iter().try_for_each(|part| {
            for result in solve_parts(work.year, work.day, part..=part, &input, &state.registry) {
                send(tx, result)?;
            }
            Ok(())
        })
    } else {
        for result in solve_parts(work.year, work.day, work.parts.clone(), &input, &state.registry) {
            send(tx, result)?;
        }
        Ok(())
    }
}

/// Parse once, then solve `parts` in order against the shared data
fn solve_parts(
    year: u16,
    day: u8,
    parts: RangeInclusive<u8>,
    input: &str,
    registry: &SolverRegistry,
) -> Vec<SolverResult> {
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error = RunError::from(e);
            return parts
                .map(|part| SolverResult::failed(year, day, part, error.clone()))
                .collect();
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    parts
        .map(|part| solve_part(year, day, part, &mut *solver, parse_duration.take()))
        .collect()
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (Err(RunError::from(e)), TimeDelta::zero()),
    };
    debug!("{year}/{day:02} part {part} finished in {solve_duration}");

    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ExecutorError> {
    tx.send(result).map_err(|_| ExecutorError::ChannelSend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::RegistryBuilder;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const DAY_10: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

    fn registry() -> SolverRegistry {
        // Links aoc-solutions so its plugins are collected
        RegistryBuilder::new()
            .register_solver_plugins(|p| p.year == 2024 && [6, 10].contains(&p.day))
            .unwrap()
            .build()
    }

    fn executor(dir: &TempDir, extra: &[&str]) -> Executor {
        let mut args = vec!["aoc", "--input-dir"];
        let path = dir.path().to_str().unwrap();
        args.push(path);
        args.extend_from_slice(extra);
        let config = Config::from_args(Args::try_parse_from(args).unwrap());
        Executor::new(registry(), &config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn write_day_10(dir: &TempDir) {
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(dir.path().join("2024/day10.txt"), DAY_10).unwrap();
    }

    #[test]
    fn test_work_items_respect_filters() {
        let dir = TempDir::new().unwrap();
        let all = executor(&dir, &[]).collect_work_items();
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].year, all[0].day, all[0].parts.clone()), (2024, 6, 1..=2));

        let only = executor(&dir, &["-d", "10", "-p", "2"]).collect_work_items();
        assert_eq!(only, vec![WorkItem { year: 2024, day: 10, parts: 2..=2 }]);

        assert!(executor(&dir, &["-y", "2023"]).collect_work_items().is_empty());
    }

    #[test]
    fn test_every_mode_yields_same_answers() {
        let dir = TempDir::new().unwrap();
        write_day_10(&dir);

        for mode in ["sequential", "year", "day", "part"] {
            let results = run(&executor(&dir, &["-d", "10", "--parallelize-by", mode]));
            let answers: Vec<_> = results
                .iter()
                .map(|r| r.answer.as_ref().unwrap().as_str())
                .collect();
            assert_eq!(answers, vec!["36", "81"], "mode {mode}");
            assert!(results[0].parse_duration.is_some());
        }
    }

    #[test]
    fn test_missing_input_fails_each_part() {
        let dir = TempDir::new().unwrap();
        write_day_10(&dir);
        let exec = executor(&dir, &[]);
        assert_eq!(exec.missing_inputs(&exec.collect_work_items()), vec![(2024, 6)]);

        let results = run(&exec);
        assert_eq!(results.len(), 4);
        assert!(matches!(results[0].answer, Err(RunError::Input(_))));
        assert!(matches!(results[1].answer, Err(RunError::Input(_))));
        assert!(results[2].answer.is_ok());
    }

    #[test]
    fn test_parse_failure_reported_per_part() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(dir.path().join("2024/day10.txt"), "01x\n").unwrap();

        let results = run(&executor(&dir, &["-d", "10"]));
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(matches!(r.answer, Err(RunError::Solver(_))), "{r:?}");
        }
    }
}
