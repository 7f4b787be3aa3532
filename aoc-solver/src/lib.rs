//! Advent of Code Solver Library
//!
//! A small framework for solving Advent of Code puzzles across years and days.
//! Each puzzle parses its input once into shared data, then solves any number
//! of numbered parts against it.
//!
//! # Overview
//!
//! - [`AocParser`] turns the raw input into `SharedData`
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` wires the parts into [`Solver`]
//! - [`RegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to solver factories
//! - `#[derive(AutoRegisterSolver)]` submits a solver to the registry at link time
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("Expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
//!         shared
//!             .iter()
//!             .max()
//!             .map(i32::to_string)
//!             .ok_or_else(|| SolveError::NoSolution("no depths".into()))
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Depths>(2021, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n5\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Plugin registration
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 16, tags = ["search"])]
//! pub struct Day16;
//!
//! let registry = RegistryBuilder::new().register_all_plugins()?.build();
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the AutoRegisterSolver expansion
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
