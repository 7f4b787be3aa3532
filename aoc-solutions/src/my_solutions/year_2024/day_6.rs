use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use indexmap::IndexSet;
use log::debug;
use rayon::prelude::*;

use crate::utils::geometry::{Coord, Direction};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "parallel"])]
pub struct Solver;

const WALL: char = '#';
/// Read past the edge of the lab
const OUTSIDE: char = ' ';

#[derive(Debug)]
pub struct SharedData {
    lab: Grid<char>,
    start: Coord,
    facing: Direction,
    /// Distinct cells of the unobstructed patrol, in the order first visited
    route: Option<IndexSet<Coord>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lab = Grid::parse_with(input, OUTSIDE, |c| {
            (c == '.' || c == WALL || Direction::from_arrow(c).is_some()).then_some(c)
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let (start, facing) = lab
            .iter()
            .find_map(|(at, c)| Direction::from_arrow(*c).map(|dir| (at, dir)))
            .ok_or_else(|| ParseError::MissingData("no guard in lab".into()))?;
        Ok(SharedData {
            lab,
            start,
            facing,
            route: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (start, facing) = (shared.start, shared.facing);
        let candidates: Vec<Coord> = route(shared)?
            .iter()
            .copied()
            .filter(|at| *at != start)
            .collect();
        debug!("day 6: checking {} obstruction candidates", candidates.len());

        let lab = &shared.lab;
        let loops = candidates
            .par_iter()
            .filter(|obstruction| matches!(patrol(lab, start, facing, Some(**obstruction)), Patrol::Loops))
            .count();
        Ok(loops.to_string())
    }
}

#[derive(Debug)]
enum Patrol {
    Leaves(IndexSet<Coord>),
    Loops,
}

fn route(shared: &mut SharedData) -> Result<&IndexSet<Coord>, SolveError> {
    let cells = match shared.route.take() {
        Some(cells) => cells,
        None => match patrol(&shared.lab, shared.start, shared.facing, None) {
            Patrol::Leaves(cells) => cells,
            Patrol::Loops => {
                return Err(SolveError::NoSolution("guard never leaves the lab".into()));
            }
        },
    };
    Ok(shared.route.insert(cells))
}

/// Walks the guard from `start`, turning right at every wall, until it steps
/// outside or repeats a heading on a cell.
fn patrol(
    lab: &Grid<char>,
    start: Coord,
    mut facing: Direction,
    obstruction: Option<Coord>,
) -> Patrol {
    let mut at = start;
    let mut cells = IndexSet::from([start]);
    let mut turns: HashSet<(Coord, Direction)> = HashSet::new();

    loop {
        let ahead = at.step(facing);
        let cell = *lab.get(ahead);
        if cell == OUTSIDE {
            return Patrol::Leaves(cells);
        }
        if cell == WALL || Some(ahead) == obstruction {
            // A loop must pass through some turn twice with the same heading
            if !turns.insert((at, facing)) {
                return Patrol::Loops;
            }
            facing = facing.rotate_cw();
        } else {
            at = ahead;
            cells.insert(at);
        }
    }
}
