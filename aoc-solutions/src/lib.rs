//! Advent of Code puzzle solutions with automatic registration
//!
//! [`utils`] holds the grid and search toolkit the solutions are built on:
//! coordinates and headings, a sentinel-bounded [`Grid`](utils::grid::Grid),
//! and BFS / Dijkstra engines over caller-defined states. Each solution under
//! `my_solutions` uses the `AutoRegisterSolver` derive for plugin registration.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
