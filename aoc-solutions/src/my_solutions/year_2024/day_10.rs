use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::Coord;
use crate::utils::grid::Grid;
use crate::utils::search::bfs;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "search"])]
pub struct Solver;

const TRAILHEAD: i8 = 0;
const SUMMIT: i8 = 9;

#[derive(Debug)]
pub struct SharedData {
    heights: Grid<i8>,
    trailheads: Vec<Coord>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // '.' marks impassable ground in some hand-made maps
        let heights = Grid::parse_with(input, -1, |c| match c {
            '.' => Some(-1),
            _ => c.to_digit(10).map(|d| d as i8),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let trailheads = heights
            .iter()
            .filter(|(_, h)| **h == TRAILHEAD)
            .map(|(at, _)| at)
            .collect();
        Ok(SharedData {
            heights,
            trailheads,
        })
    }
}

/// Neighbours exactly one step higher; the -1 sentinel is never one higher than a real height.
fn uphill(heights: &Grid<i8>) -> impl Fn(&Coord) -> Vec<Coord> + '_ {
    move |at| {
        let next = *heights.get(*at) + 1;
        at.neighbors4()
            .into_iter()
            .filter(|n| *heights.get(*n) == next)
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &shared.heights;
        let score: usize = shared
            .trailheads
            .iter()
            .map(|head| bfs::reachable_goals(*head, |at| *heights.get(*at) == SUMMIT, uphill(heights)).len())
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &shared.heights;
        let rating: usize = shared
            .trailheads
            .iter()
            .map(|head| bfs::count_paths(*head, |at| *heights.get(*at) == SUMMIT, uphill(heights)))
            .sum();
        Ok(rating.to_string())
    }
}
