//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Errors reading a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input for {year}/day{day:02} (expected {})", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why one part produced no answer
///
/// Shared behind `Arc` so a failure before solving (missing input, bad parse)
/// can be reported against every part it affects.
#[derive(Error, Debug, Clone)]
pub enum RunError {
    #[error(transparent)]
    Input(Arc<InputError>),

    #[error(transparent)]
    Solver(Arc<aoc_solver::SolverError>),
}

impl From<InputError> for RunError {
    fn from(e: InputError) -> Self {
        RunError::Input(Arc::new(e))
    }
}

impl From<aoc_solver::SolverError> for RunError {
    fn from(e: aoc_solver::SolverError) -> Self {
        RunError::Solver(Arc::new(e))
    }
}

impl From<aoc_solver::SolveError> for RunError {
    fn from(e: aoc_solver::SolveError) -> Self {
        aoc_solver::SolverError::from(e).into()
    }
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Result receiver hung up
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// A worker thread panicked
    #[error("Executor thread panicked")]
    Panicked,

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Merge two errors into one `Multiple`, flattening nested ones
    pub fn combine(self, other: ExecutorError) -> ExecutorError {
        let mut errors = self.into_flat();
        errors.extend(other.into_flat());
        ExecutorError::Multiple(errors)
    }

    fn into_flat(self) -> Vec<ExecutorError> {
        match self {
            ExecutorError::Multiple(errors) => errors,
            single => vec![single],
        }
    }
}
