//! Scenario and property tests for the search engines on real grids.

use proptest::prelude::*;

use super::*;
use crate::utils::geometry::{Coord, Direction};
use crate::utils::grid::Grid;

fn maze(text: &str) -> (Grid<char>, Coord, Coord) {
    let grid = Grid::parse(text, '#').unwrap();
    let start = grid.find(&'S').unwrap();
    let end = grid.find(&'E').unwrap();
    (grid, start, end)
}

fn open_neighbors(grid: &Grid<char>, at: &Coord) -> Vec<Coord> {
    at.neighbors4()
        .into_iter()
        .filter(|n| *grid.get(*n) != '#')
        .collect()
}

fn unit_costs(grid: &Grid<char>, at: &Coord, cost: u32) -> Vec<(Coord, u32)> {
    open_neighbors(grid, at)
        .into_iter()
        .map(|n| (n, cost + 1))
        .collect()
}

#[test]
fn test_wall_in_the_middle_has_two_tied_routes() {
    let (grid, start, end) = maze("S..\n.#.\n..E");

    let path = bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c)).unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(*path.start(), start);
    assert_eq!(*path.goal(), end);
    for pair in path.states().windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1);
    }

    let (dpath, cost) =
        dijkstra::shortest_path(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).unwrap();
    assert_eq!(cost, 4);
    assert_eq!(dpath.len(), 4);

    let optimal =
        dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).unwrap();
    assert_eq!(optimal.cost, 4);
    assert_eq!(optimal.states.len(), 8);
    assert!(!optimal.states.contains(&Coord::new(1, 1)));
}

#[test]
fn test_adjacent_start_and_end() {
    let (grid, start, end) = maze("SE.");

    let path = bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c)).unwrap();
    assert_eq!(path.len(), 1);

    let (_, cost) =
        dijkstra::shortest_path(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).unwrap();
    assert_eq!(cost, 1);

    let optimal =
        dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).unwrap();
    assert_eq!(optimal.cost, 1);
    let mut states: Vec<Coord> = optimal.states.into_iter().collect();
    states.sort();
    assert_eq!(states, vec![start, end]);
}

#[test]
fn test_walled_off_end_is_not_found() {
    let (grid, start, end) = maze("S.....\n...###\n...#E#\n...###");

    assert!(bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c)).is_none());
    assert!(
        dijkstra::shortest_path(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).is_none()
    );
    assert!(
        dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)).is_none()
    );
}

#[test]
fn test_heading_state_collects_every_tied_goal() {
    // Turning costs 1000, stepping costs 1. Going round the wall either way
    // costs three turns and four steps, arriving at E with opposite headings.
    let (grid, start, end) = maze(".E.\n.#.\n.S.");
    let moves = |(at, dir): &(Coord, Direction), cost: u32| {
        let mut next = vec![
            ((*at, dir.rotate_cw()), cost + 1000),
            ((*at, dir.rotate_ccw()), cost + 1000),
        ];
        let ahead = at.step(*dir);
        if *grid.get(ahead) != '#' {
            next.push(((ahead, *dir), cost + 1));
        }
        next
    };

    let optimal = dijkstra::all_optimal((start, Direction::Up), |(at, _)| *at == end, moves).unwrap();
    assert_eq!(optimal.cost, 3004);
    assert_eq!(optimal.goals.len(), 2);
    assert!(optimal.goals.contains(&(end, Direction::Left)));
    assert!(optimal.goals.contains(&(end, Direction::Right)));
    assert_eq!(optimal.project(|(at, _)| *at).len(), 8);

    let (path, single) =
        dijkstra::shortest_path((start, Direction::Up), |(at, _)| *at == end, moves).unwrap();
    assert_eq!(single, optimal.cost);
    assert_eq!(path.len(), 7);
}

#[test]
fn test_count_paths_on_height_map() {
    let heights = Grid::parse_with("0123\n1234\n8765\n9876", -1, |c| {
        c.to_digit(10).map(|d| d as i8)
    })
    .unwrap();
    let uphill = |at: &Coord| {
        let h = *heights.get(*at);
        at.neighbors4()
            .into_iter()
            .filter(|n| *heights.get(*n) == h + 1)
            .collect::<Vec<_>>()
    };
    let is_top = |at: &Coord| *heights.get(*at) == 9;

    assert_eq!(bfs::reachable_goals(Coord::ORIGIN, is_top, uphill).len(), 1);
    assert_eq!(bfs::count_paths(Coord::ORIGIN, is_top, uphill), 16);
}

fn open_grid(rows: usize, cols: usize) -> Grid<char> {
    Grid::of(vec![vec!['.'; cols]; rows], '#').unwrap()
}

/// Random mazes: `true` cells are walls. Start and end are forced open.
fn arb_maze() -> impl Strategy<Value = (Grid<char>, Coord, Coord)> {
    (2usize..9, 2usize..9).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(prop::bool::weighted(0.25), cols), rows),
            0..rows,
            0..cols,
            0..rows,
            0..cols,
        )
            .prop_map(|(walls, sr, sc, er, ec)| {
                let mut data: Vec<Vec<char>> = walls
                    .into_iter()
                    .map(|row| row.into_iter().map(|w| if w { '#' } else { '.' }).collect())
                    .collect();
                data[sr][sc] = '.';
                data[er][ec] = '.';
                let grid = Grid::of(data, '#').unwrap();
                (
                    grid,
                    Coord::new(sr as i32, sc as i32),
                    Coord::new(er as i32, ec as i32),
                )
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_open_grid_bfs_is_manhattan(
        (rows, cols, sr, sc, er, ec) in (1usize..15, 1usize..15)
            .prop_flat_map(|(r, c)| (Just(r), Just(c), 0..r, 0..c, 0..r, 0..c)),
    ) {
        let grid = open_grid(rows, cols);
        let start = Coord::new(sr as i32, sc as i32);
        let end = Coord::new(er as i32, ec as i32);
        let path = bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c)).unwrap();
        prop_assert_eq!(path.len() as u32, start.manhattan(end));
    }

    #[test]
    fn prop_unit_dijkstra_matches_bfs((grid, start, end) in arb_maze()) {
        let bfs_len = bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c))
            .map(|p| p.len() as u32);
        let dijkstra_cost = dijkstra::shortest_path(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost))
            .map(|(_, cost)| cost);
        let optimal_cost = dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost))
            .map(|o| o.cost);
        prop_assert_eq!(bfs_len, dijkstra_cost);
        prop_assert_eq!(dijkstra_cost, optimal_cost);
    }

    #[test]
    fn prop_searches_are_deterministic((grid, start, end) in arb_maze()) {
        let run = || {
            (
                bfs::shortest_path(start, |c| *c == end, |c| open_neighbors(&grid, c)),
                dijkstra::shortest_path(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost)),
                dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost))
                    .map(|o| (o.cost, o.states.into_iter().collect::<Vec<_>>())),
            )
        };
        prop_assert_eq!(run(), run());
    }

    /// Every state returned lies on an optimal path: its distance from the
    /// start plus its distance to the goal equals the optimal cost.
    #[test]
    fn prop_all_optimal_states_are_on_optimal_paths((grid, start, end) in arb_maze()) {
        let optimal = dijkstra::all_optimal(start, |c| *c == end, |c, cost| unit_costs(&grid, c, cost));
        let from_start = dijkstra::costs(start, |c, cost| unit_costs(&grid, c, cost));
        // Unit moves on a grid are symmetric, so distances from the end are distances to it.
        let to_end = dijkstra::costs(end, |c, cost| unit_costs(&grid, c, cost));

        match optimal {
            None => prop_assert!(!from_start.contains_key(&end)),
            Some(optimal) => {
                prop_assert_eq!(Some(&optimal.cost), from_start.get(&end));
                for state in &optimal.states {
                    prop_assert_eq!(from_start[state] + to_end[state], optimal.cost);
                }
                // ...and nothing on an optimal path is missing.
                let on_some_optimal = from_start
                    .iter()
                    .filter(|(c, d)| to_end.get(*c).is_some_and(|e| **d + e == optimal.cost))
                    .count();
                prop_assert_eq!(on_some_optimal, optimal.states.len());
            }
        }
    }
}
