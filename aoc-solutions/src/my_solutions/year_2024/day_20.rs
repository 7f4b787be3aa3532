use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

use crate::utils::geometry::{Coord, Delta};
use crate::utils::grid::Grid;
use crate::utils::search::bfs;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["grid", "bfs"])]
pub struct Solver;

/// Picoseconds a cheat must save to be counted
const MIN_SAVING: usize = 100;

#[derive(Debug)]
pub struct SharedData {
    /// Picoseconds from the start along the track, `None` for walls
    track: Grid<Option<usize>>,
    min_saving: usize,
}

impl SharedData {
    /// Count cheats saving less than the puzzle's 100 picoseconds.
    pub fn with_min_saving(mut self, min_saving: usize) -> Self {
        self.min_saving = min_saving;
        self
    }

    /// Cheats of at most `max_len` moves through walls that save at least `min_saving`.
    ///
    /// A cheat starts on a track cell and ends on another one `d` moves away
    /// (Manhattan distance, `2 <= d <= max_len`); it saves the track distance
    /// between them minus `d`.
    fn count_cheats(&self, max_len: i32) -> usize {
        let offsets: Vec<(Delta, usize)> = (-max_len..=max_len)
            .flat_map(|drow| (-max_len..=max_len).map(move |dcol| Delta::new(drow, dcol)))
            .map(|d| (d, (d.drow.unsigned_abs() + d.dcol.unsigned_abs()) as usize))
            .filter(|(_, len)| (2..=max_len as usize).contains(len))
            .collect();

        let cheats = self
            .track
            .iter()
            .filter_map(|(at, dist)| dist.map(|d| (at, d)))
            .map(|(at, from)| {
                offsets
                    .iter()
                    .filter(|(delta, len)| {
                        self.track
                            .get(at + *delta)
                            .is_some_and(|to| to >= from + len + self.min_saving)
                    })
                    .count()
            })
            .sum();
        debug!("day 20: {cheats} cheats of up to {max_len} moves save {}+", self.min_saving);
        cheats
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let racetrack = Grid::parse(input, '#').map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = racetrack
            .find(&'S')
            .map_err(|_| ParseError::MissingData("no start 'S'".into()))?;
        let end = racetrack
            .find(&'E')
            .map_err(|_| ParseError::MissingData("no end 'E'".into()))?;

        let dist = bfs::distances(start, |at: &Coord| {
            at.neighbors4()
                .into_iter()
                .filter(|n| *racetrack.get(*n) != '#')
                .collect::<Vec<_>>()
        });
        if !dist.contains_key(&end) {
            return Err(ParseError::InvalidFormat("end is not on the track".into()));
        }

        let rows = (0..racetrack.rows() as i32)
            .map(|row| {
                (0..racetrack.cols() as i32)
                    .map(|col| dist.get(&Coord::new(row, col)).copied())
                    .collect()
            })
            .collect();
        let track = Grid::of(rows, None).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(SharedData {
            track,
            min_saving: MIN_SAVING,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(20).to_string())
    }
}
