use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

use crate::utils::geometry::Coord;
use crate::utils::grid::Grid;
use crate::utils::search::{Path, bfs};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "search", "bfs"])]
pub struct Solver;

/// Memory space is `0..=70` on both axes
const MEMORY_SIDE: usize = 71;
/// Bytes fallen before part 1 looks for a route
const FALLEN_BYTES: usize = 1024;

#[derive(Debug)]
pub struct SharedData {
    /// Falling byte positions, `x` as column and `y` as row
    bytes: Vec<Coord>,
    side: usize,
    fallen: usize,
}

impl SharedData {
    /// Use a smaller memory space, as in the puzzle's worked example.
    pub fn with_memory(mut self, side: usize, fallen: usize) -> Self {
        self.side = side;
        self.fallen = fallen;
        self
    }

    fn exit(&self) -> Coord {
        let last = self.side as i32 - 1;
        Coord::new(last, last)
    }

    /// Memory after the first `count` bytes have fallen; `true` is corrupted.
    ///
    /// Everything outside the memory space reads as corrupted.
    fn memory(&self, count: usize) -> Result<Grid<bool>, SolveError> {
        let mut cells = vec![vec![false; self.side]; self.side];
        for byte in self.bytes.iter().take(count) {
            let row = usize::try_from(byte.row).ok().filter(|r| *r < self.side);
            let col = usize::try_from(byte.col).ok().filter(|c| *c < self.side);
            match (row, col) {
                (Some(r), Some(c)) => cells[r][c] = true,
                _ => {
                    return Err(SolveError::SolveFailed(
                        anyhow!("byte {},{} falls outside memory", byte.col, byte.row).into(),
                    ));
                }
            }
        }
        Grid::of(cells, true).map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }

    fn route(&self, count: usize) -> Result<Option<Path<Coord>>, SolveError> {
        let memory = self.memory(count)?;
        if *memory.get(Coord::ORIGIN) {
            return Ok(None);
        }
        let exit = self.exit();
        Ok(bfs::shortest_path(Coord::ORIGIN, |at| *at == exit, |at| {
            at.neighbors4()
                .into_iter()
                .filter(|n| !*memory.get(*n))
                .collect::<Vec<_>>()
        }))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bytes = input
            .trim()
            .lines()
            .map(|line| -> anyhow::Result<Coord> {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .ok_or_else(|| anyhow!("expected 'x,y'"))?;
                let x: i32 = x.parse().context("bad x")?;
                let y: i32 = y.parse().context("bad y")?;
                Ok(Coord::new(y, x))
            })
            .enumerate()
            .map(|(idx, byte)| byte.map_err(|e| anyhow!("(line {}) {e:#}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(SharedData {
            bytes,
            side: MEMORY_SIDE,
            fallen: FALLEN_BYTES,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = shared
            .route(shared.fallen)?
            .ok_or_else(|| SolveError::NoSolution(format!("exit blocked after {} bytes", shared.fallen)))?;
        Ok(path.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.route(shared.bytes.len())?.is_some() {
            return Err(SolveError::NoSolution("exit stays reachable after every byte".into()));
        }

        // Invariant: the exit is reachable after `open` bytes and blocked after `blocked`.
        let (mut open, mut blocked) = (0, shared.bytes.len());
        while blocked - open > 1 {
            let mid = open + (blocked - open) / 2;
            debug!("day 18: bytes {open}..{blocked}, probing {mid}");
            if shared.route(mid)?.is_some() {
                open = mid;
            } else {
                blocked = mid;
            }
        }

        let byte = shared.bytes[blocked - 1];
        Ok(format!("{},{}", byte.col, byte.row))
    }
}
