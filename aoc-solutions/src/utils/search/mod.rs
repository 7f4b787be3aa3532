//! Generic state-space search.
//!
//! The engines know nothing about grids. A caller picks a state type (a
//! [`Coord`](super::geometry::Coord), or a coordinate paired with a heading),
//! a goal predicate, and a neighbour function closing over whatever map and
//! movement rules apply. Each call owns its frontier and bookkeeping, so many
//! searches may run in parallel over one shared, read-only grid.
//!
//! - [`bfs`]: unweighted search. [`bfs::shortest_path`] finds one path with the
//!   fewest edges; [`bfs::count_paths`] counts every walk that ends at a goal.
//! - [`dijkstra`]: weighted search. [`dijkstra::shortest_path`] finds one
//!   cheapest path; [`dijkstra::all_optimal`] collects every state lying on any
//!   cheapest path.
//!
//! "No path" is an ordinary outcome and comes back as `None`.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::geometry::Coord;
//! use aoc_solutions::utils::grid::Grid;
//! use aoc_solutions::utils::search::{bfs, dijkstra};
//!
//! let grid = Grid::parse("S..\n.#.\n..E", '#').unwrap();
//! let start = grid.find(&'S').unwrap();
//! let end = grid.find(&'E').unwrap();
//! let open = |c: &Coord| {
//!     c.neighbors4()
//!         .into_iter()
//!         .filter(|n| *grid.get(*n) != '#')
//!         .collect::<Vec<_>>()
//! };
//!
//! let path = bfs::shortest_path(start, |c| *c == end, &open).unwrap();
//! assert_eq!(path.len(), 4);
//!
//! let optimal = dijkstra::all_optimal(
//!     start,
//!     |c| *c == end,
//!     |c: &Coord, cost: u32| open(c).into_iter().map(move |n| (n, cost + 1)),
//! )
//! .unwrap();
//! assert_eq!(optimal.cost, 4);
//! assert_eq!(optimal.states.len(), 8);
//! ```

pub mod bfs;
pub mod dijkstra;

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Anything usable as a search node.
pub trait State: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> State for T {}

/// Accumulated path weight for [`dijkstra`].
///
/// `Default::default()` is the zero cost of the start state. Costs must never
/// decrease along an edge; the engines do not check this.
pub trait Cost: Copy + Ord + Default + Add<Output = Self> + Debug {}

impl<T: Copy + Ord + Default + Add<Output = T> + Debug> Cost for T {}

/// A sequence of states from a search start to the goal it reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S> {
    states: Vec<S>,
}

impl<S> Path<S> {
    pub(crate) fn from_states(states: Vec<S>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Number of edges; a path that starts on its goal has length 0.
    pub fn len(&self) -> usize {
        self.states.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> &S {
        &self.states[0]
    }

    pub fn goal(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }
}

#[cfg(test)]
mod tests;
