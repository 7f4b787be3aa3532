//! Benchmark comparing the search engines on random mazes.
//!
//! Run with: cargo run --example search_benchmark --release
//!
//! Each maze is a square grid with roughly a quarter of the cells walled off.
//! Every engine searches from the top-left corner to the bottom-right one:
//! - BFS shortest path (fewest edges)
//! - Dijkstra single path with unit costs
//! - Dijkstra multi-optimal paths with unit costs
//!
//! Each runs over all mazes sequentially and with rayon, and the reported
//! lengths are cross-checked.

use aoc_solutions::utils::geometry::Coord;
use aoc_solutions::utils::grid::Grid;
use aoc_solutions::utils::search::{bfs, dijkstra};
use rayon::prelude::*;
use std::time::{Duration, Instant};

const MAZE_SIZE: usize = 141;
const NUM_MAZES: usize = 64;
const WALL_PERCENT: u64 = 25;

/// Random maze with the two corners forced open
fn generate_maze(seed: u64, size: usize) -> Grid<bool> {
    let mut rng = seed;
    let mut cells: Vec<Vec<bool>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    (rng >> 33) % 100 < WALL_PERCENT
                })
                .collect()
        })
        .collect();
    cells[0][0] = false;
    cells[size - 1][size - 1] = false;
    Grid::of(cells, true).unwrap()
}

fn open(maze: &Grid<bool>, at: &Coord) -> Vec<Coord> {
    at.neighbors4()
        .into_iter()
        .filter(|n| !*maze.get(*n))
        .collect()
}

fn exit(maze: &Grid<bool>) -> Coord {
    Coord::new(maze.rows() as i32 - 1, maze.cols() as i32 - 1)
}

fn run_bfs(maze: &Grid<bool>) -> Option<u32> {
    let end = exit(maze);
    bfs::shortest_path(Coord::ORIGIN, |c| *c == end, |c| open(maze, c)).map(|p| p.len() as u32)
}

fn run_dijkstra(maze: &Grid<bool>) -> Option<u32> {
    let end = exit(maze);
    dijkstra::shortest_path(Coord::ORIGIN, |c| *c == end, |c, cost: u32| {
        open(maze, c).into_iter().map(move |n| (n, cost + 1))
    })
    .map(|(_, cost)| cost)
}

fn run_all_optimal(maze: &Grid<bool>) -> Option<u32> {
    let end = exit(maze);
    dijkstra::all_optimal(Coord::ORIGIN, |c| *c == end, |c, cost: u32| {
        open(maze, c).into_iter().map(move |n| (n, cost + 1))
    })
    .map(|o| o.cost)
}

fn time<F>(label: &str, mazes: &[Grid<bool>], parallel: bool, f: F) -> (Vec<Option<u32>>, Duration)
where
    F: Fn(&Grid<bool>) -> Option<u32> + Sync,
{
    let start = Instant::now();
    let results: Vec<Option<u32>> = if parallel {
        mazes.par_iter().map(&f).collect()
    } else {
        mazes.iter().map(&f).collect()
    };
    let elapsed = start.elapsed();
    println!("{label:<32} {elapsed:?}");
    (results, elapsed)
}

fn main() {
    println!("Grid Search Benchmark");
    println!("=====================\n");

    let mazes: Vec<Grid<bool>> = (0..NUM_MAZES)
        .map(|i| generate_maze(42 + i as u64, MAZE_SIZE))
        .collect();
    println!("{NUM_MAZES} mazes of {MAZE_SIZE}x{MAZE_SIZE}, ~{WALL_PERCENT}% walls\n");

    let (bfs_seq, bfs_seq_time) = time("BFS (sequential)", &mazes, false, run_bfs);
    let (bfs_par, bfs_par_time) = time("BFS + par_iter", &mazes, true, run_bfs);
    let (dij_seq, _) = time("Dijkstra (sequential)", &mazes, false, run_dijkstra);
    let (dij_par, _) = time("Dijkstra + par_iter", &mazes, true, run_dijkstra);
    let (all_seq, _) = time("Dijkstra all-optimal (sequential)", &mazes, false, run_all_optimal);
    let (all_par, _) = time("Dijkstra all-optimal + par_iter", &mazes, true, run_all_optimal);

    println!("\n=== Verification ===");
    let all_agree = [&bfs_par, &dij_seq, &dij_par, &all_seq, &all_par]
        .iter()
        .all(|other| **other == bfs_seq);
    println!("All engines agree: {}", if all_agree { "✓" } else { "✗" });

    let solvable = bfs_seq.iter().filter(|r| r.is_some()).count();
    println!("Solvable mazes: {solvable}/{NUM_MAZES}");
    if !bfs_par_time.is_zero() {
        println!(
            "BFS parallel speedup: {:.2}x",
            bfs_seq_time.as_secs_f64() / bfs_par_time.as_secs_f64()
        );
    }
}
