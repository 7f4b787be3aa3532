//! Dijkstra's algorithm over caller-defined states and costs.
//!
//! The neighbour function receives the state being expanded together with its
//! accumulated cost and yields `(next, cost_of_next)` pairs, where the cost is
//! already accumulated: a unit step from a state at cost `c` yields `c + 1`.
//! This lets a caller price moves by anything it can see, such as turning
//! versus walking straight.
//!
//! Costs must not decrease along an edge. Negative steps are not detected and
//! the results are then meaningless.
//!
//! Entries with equal cost leave the frontier in the order they were pushed,
//! and neighbours are processed in the order the caller yields them, so every
//! result here is deterministic for a given input.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use indexmap::IndexSet;
use log::{debug, trace};

use super::{Cost, Path, State};

/// Frontier entry. Ordered so that [`BinaryHeap`] pops the cheapest, then the oldest.
struct Entry<S, C> {
    cost: C,
    seq: u64,
    state: S,
}

impl<S, C: Ord> PartialEq for Entry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, C: Ord> Eq for Entry<S, C> {}

impl<S, C: Ord> PartialOrd for Entry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> Ord for Entry<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct Frontier<S, C> {
    heap: BinaryHeap<Entry<S, C>>,
    pushed: u64,
}

impl<S, C: Ord> Frontier<S, C> {
    fn new(start: S, zero: C) -> Self {
        let mut frontier = Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        };
        frontier.push(start, zero);
        frontier
    }

    fn push(&mut self, state: S, cost: C) {
        self.heap.push(Entry {
            cost,
            seq: self.pushed,
            state,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<(S, C)> {
        self.heap.pop().map(|e| (e.state, e.cost))
    }
}

/// One cheapest path from `start` to a state satisfying `is_goal`, with its cost.
///
/// Among equally cheap paths the one discovered first wins. Returns `None`
/// when the frontier empties without reaching a goal.
pub fn shortest_path<S, C, G, N, I>(start: S, mut is_goal: G, mut neighbor_costs: N) -> Option<(Path<S>, C)>
where
    S: State,
    C: Cost,
    G: FnMut(&S) -> bool,
    N: FnMut(&S, C) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    let mut frontier = Frontier::new(start.clone(), C::default());
    let mut best: HashMap<S, C> = HashMap::from([(start, C::default())]);
    let mut parent: HashMap<S, S> = HashMap::new();
    let mut closed: HashSet<S> = HashSet::new();

    while let Some((state, cost)) = frontier.pop() {
        if !closed.insert(state.clone()) {
            continue;
        }

        if is_goal(&state) {
            debug!(
                "dijkstra: goal at cost {cost:?} after closing {} states",
                closed.len()
            );
            let mut states = vec![state];
            while let Some(prev) = states.last().and_then(|s| parent.get(s)) {
                states.push(prev.clone());
            }
            states.reverse();
            return Some((Path::from_states(states), cost));
        }

        trace!("dijkstra: expanding state at cost {cost:?}");
        for (next, next_cost) in neighbor_costs(&state, cost) {
            if closed.contains(&next) {
                continue;
            }
            if best.get(&next).is_none_or(|known| next_cost < *known) {
                best.insert(next.clone(), next_cost);
                parent.insert(next.clone(), state.clone());
                frontier.push(next, next_cost);
            }
        }
    }

    debug!("dijkstra: no path after closing {} states", closed.len());
    None
}

/// Cheapest cost from `start` to every reachable state.
pub fn costs<S, C, N, I>(start: S, mut neighbor_costs: N) -> HashMap<S, C>
where
    S: State,
    C: Cost,
    N: FnMut(&S, C) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    let mut frontier = Frontier::new(start.clone(), C::default());
    let mut best: HashMap<S, C> = HashMap::from([(start, C::default())]);
    let mut closed: HashSet<S> = HashSet::new();

    while let Some((state, cost)) = frontier.pop() {
        if !closed.insert(state.clone()) {
            continue;
        }
        for (next, next_cost) in neighbor_costs(&state, cost) {
            if !closed.contains(&next) && best.get(&next).is_none_or(|known| next_cost < *known) {
                best.insert(next.clone(), next_cost);
                frontier.push(next, next_cost);
            }
        }
    }

    best
}

/// Every state on any cheapest path to a goal.
#[derive(Debug, Clone)]
pub struct Optimal<S, C> {
    /// Cost of the cheapest goal.
    pub cost: C,
    /// Goal states reached at exactly [`Optimal::cost`], in the order they were closed.
    pub goals: IndexSet<S>,
    /// Goals first, then every state found walking predecessors back to the start.
    pub states: IndexSet<S>,
}

impl<S, C> Optimal<S, C> {
    /// Distinct images of [`Optimal::states`] under `f`, such as positions without heading.
    pub fn project<P, F>(&self, f: F) -> IndexSet<P>
    where
        P: Hash + Eq,
        F: FnMut(&S) -> P,
    {
        self.states.iter().map(f).collect()
    }
}

/// Every state lying on at least one minimum-cost path from `start` to a goal.
///
/// Each state keeps the set of predecessors that reach it at its best known
/// cost: a strictly cheaper arrival replaces the set, an equally cheap one
/// joins it. The search keeps going after the first goal until the frontier
/// holds only entries costlier than that goal, so goals tied at the same cost
/// (for instance one cell entered from two headings) are all collected.
/// Walking the predecessor sets back from those goals then yields the states.
///
/// Returns `None` when no goal is reachable.
pub fn all_optimal<S, C, G, N, I>(start: S, mut is_goal: G, mut neighbor_costs: N) -> Option<Optimal<S, C>>
where
    S: State,
    C: Cost,
    G: FnMut(&S) -> bool,
    N: FnMut(&S, C) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    let mut frontier = Frontier::new(start.clone(), C::default());
    let mut best: HashMap<S, C> = HashMap::from([(start, C::default())]);
    let mut predecessors: HashMap<S, IndexSet<S>> = HashMap::new();
    let mut closed: HashSet<S> = HashSet::new();
    let mut goal_cost: Option<C> = None;
    let mut goals: IndexSet<S> = IndexSet::new();

    while let Some((state, cost)) = frontier.pop() {
        if goal_cost.is_some_and(|limit| cost > limit) {
            break;
        }
        if !closed.insert(state.clone()) {
            continue;
        }

        if is_goal(&state) {
            goal_cost = Some(cost);
            goals.insert(state.clone());
        }

        for (next, next_cost) in neighbor_costs(&state, cost) {
            match best.get(&next).copied() {
                Some(known) if next_cost > known => {}
                Some(known) if next_cost == known => {
                    predecessors
                        .entry(next)
                        .or_default()
                        .insert(state.clone());
                }
                _ => {
                    best.insert(next.clone(), next_cost);
                    predecessors.insert(next.clone(), IndexSet::from([state.clone()]));
                    frontier.push(next, next_cost);
                }
            }
        }
    }

    let Some(cost) = goal_cost else {
        debug!("dijkstra: no path after closing {} states", closed.len());
        return None;
    };

    // The set doubles as the work queue: everything past `next` is unvisited.
    let mut states = goals.clone();
    let mut next = 0;
    while let Some(current) = states.get_index(next).cloned() {
        if let Some(prev) = predecessors.get(&current) {
            states.extend(prev.iter().cloned());
        }
        next += 1;
    }

    debug!(
        "dijkstra: {} goal(s) at cost {cost:?}, {} states on optimal paths",
        goals.len(),
        states.len()
    );
    Some(Optimal {
        cost,
        goals,
        states,
    })
}
