//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

/// Wall-clock interval of one parse or one solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f`, returning its value and how long it took
    fn measure<T>(f: impl FnOnce() -> T) -> (T, Self) {
        let start = Utc::now();
        let value = f();
        (value, Self { start, end: Utc::now() })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// Parsed input for one year-day, ready to solve any of its parts.
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on
/// the same shared data, so a part may reuse what an earlier one cached.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parses `input` and records how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (parsed, parse_timing) = Timing::measure(|| S::parse(input));
        let shared = parsed.inspect_err(|e| debug!("{year}/{day:02}: parse failed: {e}"))?;
        debug!(
            "{year}/{day:02}: parsed {} bytes in {}",
            input.len(),
            parse_timing.duration()
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_timing,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`].
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} ({})", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, timing) = Timing::measure(|| S::solve_part_checked_range(shared, part));
        match &answer {
            Ok(_) => debug!(
                "{}/{:02} part {part}: solved in {}",
                self.year,
                self.day,
                timing.duration()
            ),
            Err(e) => debug!("{}/{:02} part {part}: {e}", self.year, self.day),
        }

        Ok(SolveResult {
            part,
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Part 1 counts lines, part 2 reports the first one
    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no lines".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => shared
                    .first()
                    .map(|l| l.to_string())
                    .ok_or_else(|| SolveError::NoSolution("empty".into())),
            }
        }
    }

    #[test]
    fn test_instance_solves_parts_with_timing() {
        let mut instance = SolverInstance::<Lines>::new(2024, 3, "ab\ncd").unwrap();
        assert_eq!((instance.year(), instance.day(), instance.parts()), (2024, 3, 2));
        assert!(instance.parse_duration() >= TimeDelta::zero());

        let first = instance.solve(1).unwrap();
        assert_eq!((first.part, first.answer.as_str()), (1, "2"));
        assert!(first.timing.end >= first.timing.start);
        assert_eq!(instance.solve(2).unwrap().answer, "ab");
    }

    #[test]
    fn test_instance_surfaces_errors() {
        assert!(matches!(
            SolverInstance::<Lines>::new(2024, 3, ""),
            Err(ParseError::MissingData(_))
        ));

        let mut instance = SolverInstance::<Lines>::new(2024, 3, "x").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }
}
