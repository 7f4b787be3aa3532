//! Breadth-first search over caller-defined states.
//!
//! All operations share one FIFO frontier seeded with the start state at depth
//! 0. They differ in the [`Revisit`] policy and in what happens when a goal is
//! polled:
//!
//! | operation | policy | on goal |
//! |---|---|---|
//! | [`shortest_path`] | [`Revisit::Never`] | stop, rebuild the path |
//! | [`reachable_goals`] | [`Revisit::Never`] | record, keep searching |
//! | [`count_paths`] | [`Revisit::Always`] | count, keep searching |
//! | [`distances`] | [`Revisit::Never`] | no goals, map every state |
//!
//! Goal states end a walk: they are never expanded further.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use super::{Path, State};

/// Whether a state already seen may be queued again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revisit {
    /// Queue each state on first discovery only. Gives fewest-edge distances.
    Never,
    /// Queue a state every time it is produced. Follows every walk, so the
    /// neighbour relation must be acyclic or the search never ends.
    Always,
}

/// What to do with a state just taken off the frontier.
enum Visit {
    Expand,
    Prune,
    Stop,
}

struct Frontier<S> {
    queue: VecDeque<(S, usize)>,
    /// Discovery parent of every queued state; empty under [`Revisit::Always`].
    parents: HashMap<S, Option<S>>,
    revisit: Revisit,
    expanded: usize,
}

impl<S: State> Frontier<S> {
    fn new(start: S, revisit: Revisit) -> Self {
        let mut parents = HashMap::new();
        if revisit == Revisit::Never {
            parents.insert(start.clone(), None);
        }
        Self {
            queue: VecDeque::from([(start, 0)]),
            parents,
            revisit,
            expanded: 0,
        }
    }

    fn pop(&mut self) -> Option<(S, usize)> {
        self.queue.pop_front()
    }

    fn offer(&mut self, from: &S, next: S, depth: usize) {
        match self.revisit {
            Revisit::Always => self.queue.push_back((next, depth)),
            Revisit::Never => {
                if let Entry::Vacant(slot) = self.parents.entry(next.clone()) {
                    slot.insert(Some(from.clone()));
                    self.queue.push_back((next, depth));
                }
            }
        }
    }

    /// Walks discovery parents back from `goal`. Only valid under [`Revisit::Never`].
    fn path_to(&self, goal: S) -> Path<S> {
        let mut states = vec![goal];
        while let Some(Some(parent)) = states.last().and_then(|s| self.parents.get(s)) {
            states.push(parent.clone());
        }
        states.reverse();
        Path::from_states(states)
    }
}

fn explore<S, N, I, V>(start: S, revisit: Revisit, mut neighbors: N, mut visit: V) -> (Frontier<S>, Option<S>)
where
    S: State,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    V: FnMut(&S, usize) -> Visit,
{
    let mut frontier = Frontier::new(start, revisit);

    while let Some((current, depth)) = frontier.pop() {
        match visit(&current, depth) {
            Visit::Stop => return (frontier, Some(current)),
            Visit::Prune => continue,
            Visit::Expand => {}
        }

        frontier.expanded += 1;
        trace!("bfs: expanding state at depth {depth}");
        for next in neighbors(&current) {
            frontier.offer(&current, next, depth + 1);
        }
    }

    (frontier, None)
}

/// One path with the fewest edges from `start` to a state satisfying `is_goal`.
///
/// Returns `None` when no goal is reachable.
pub fn shortest_path<S, G, N, I>(start: S, mut is_goal: G, neighbors: N) -> Option<Path<S>>
where
    S: State,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let (frontier, goal) = explore(start, Revisit::Never, neighbors, |state, _| {
        if is_goal(state) {
            Visit::Stop
        } else {
            Visit::Expand
        }
    });

    match goal {
        Some(goal) => {
            let path = frontier.path_to(goal);
            debug!(
                "bfs: goal at depth {} after expanding {} states",
                path.len(),
                frontier.expanded
            );
            Some(path)
        }
        None => {
            debug!("bfs: no path after expanding {} states", frontier.expanded);
            None
        }
    }
}

/// Every distinct goal reachable from `start`, in discovery order.
pub fn reachable_goals<S, G, N, I>(start: S, mut is_goal: G, neighbors: N) -> Vec<S>
where
    S: State,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut goals = Vec::new();
    explore(start, Revisit::Never, neighbors, |state, _| {
        if is_goal(state) {
            goals.push(state.clone());
            Visit::Prune
        } else {
            Visit::Expand
        }
    });
    goals
}

/// Number of distinct walks from `start` that end at a goal.
///
/// States are re-queued every time they are produced, so two walks that meet
/// in the middle are both counted. `neighbors` must not produce cycles.
pub fn count_paths<S, G, N, I>(start: S, mut is_goal: G, neighbors: N) -> usize
where
    S: State,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut count = 0;
    let (frontier, _) = explore(start, Revisit::Always, neighbors, |state, _| {
        if is_goal(state) {
            count += 1;
            Visit::Prune
        } else {
            Visit::Expand
        }
    });
    debug!(
        "bfs: counted {count} walks after expanding {} states",
        frontier.expanded
    );
    count
}

/// Edge distance from `start` to every reachable state, `start` included.
pub fn distances<S, N, I>(start: S, neighbors: N) -> HashMap<S, usize>
where
    S: State,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut dist = HashMap::new();
    explore(start, Revisit::Never, neighbors, |state, depth| {
        dist.insert(state.clone(), depth);
        Visit::Expand
    });
    dist
}
