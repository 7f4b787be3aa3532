use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::{Coord, Direction};
use crate::utils::grid::Grid;
use crate::utils::search::dijkstra;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "search", "dijkstra"])]
pub struct Solver;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

/// A reindeer: where it stands and which way it faces
type Reindeer = (Coord, Direction);

#[derive(Debug)]
pub struct SharedData {
    maze: Grid<char>,
    start: Coord,
    end: Coord,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = Grid::parse(input, '#').map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = maze
            .find(&'S')
            .map_err(|_| ParseError::MissingData("no start tile 'S'".into()))?;
        let end = maze
            .find(&'E')
            .map_err(|_| ParseError::MissingData("no end tile 'E'".into()))?;
        Ok(SharedData { maze, start, end })
    }
}

impl SharedData {
    /// Step forward if the tile ahead is open, or turn a quarter either way.
    fn moves(&self, (at, facing): &Reindeer, cost: u64) -> Vec<(Reindeer, u64)> {
        let mut next = Vec::with_capacity(3);
        let ahead = at.step(*facing);
        if *self.maze.get(ahead) != '#' {
            next.push(((ahead, *facing), cost + STEP_COST));
        }
        next.push(((*at, facing.rotate_cw()), cost + TURN_COST));
        next.push(((*at, facing.rotate_ccw()), cost + TURN_COST));
        next
    }

    fn is_end(&self, (at, _): &Reindeer) -> bool {
        *at == self.end
    }
}

fn no_route() -> SolveError {
    SolveError::NoSolution("end tile is unreachable".into())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let data = &*shared;
        let (_, cost) = dijkstra::shortest_path(
            (data.start, Direction::Right),
            |r| data.is_end(r),
            |r, cost| data.moves(r, cost),
        )
        .ok_or_else(no_route)?;
        Ok(cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let data = &*shared;
        let optimal = dijkstra::all_optimal(
            (data.start, Direction::Right),
            |r| data.is_end(r),
            |r, cost| data.moves(r, cost),
        )
        .ok_or_else(no_route)?;
        Ok(optimal.project(|(at, _)| *at).len().to_string())
    }
}
