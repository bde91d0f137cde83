//! Shortest-path searches over (station, line) states.
//!
//! Both searches are Dijkstra over [`StationNode`]s rather than stations.
//! From `(s, line)`, an edge on the same line moves to `(t, line)` for the
//! edge's minutes. An edge on another line instead switches line in place,
//! moving to `(s, edge_line)` for the change penalty and one change; the
//! ride along the new line happens when that state is expanded.
//!
//! The searches differ only in how accumulated costs are ordered: by minutes
//! alone, or by changes and then minutes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::NetworkGraph;

use super::route::{RouteResult, StationNode};

/// Find the route with the least total minutes.
///
/// Every change of line adds `change_time` minutes. Returns an empty result
/// if `goal` cannot be reached from `start`.
pub fn shortest_time(
    graph: &NetworkGraph,
    change_time: f64,
    start: &str,
    goal: &str,
) -> RouteResult {
    search::<FastestTime>(graph, change_time, start, goal)
}

/// Find the route with the fewest changes of line.
///
/// Among routes with equally few changes, the one with the least total
/// minutes wins. Returns an empty result if `goal` cannot be reached.
pub fn least_amount_of_changes(
    graph: &NetworkGraph,
    change_time: f64,
    start: &str,
    goal: &str,
) -> RouteResult {
    search::<FewestChanges>(graph, change_time, start, goal)
}

/// Accumulated cost of reaching a state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost {
    minutes: f64,
    changes: usize,
}

impl Cost {
    const ZERO: Cost = Cost {
        minutes: 0.0,
        changes: 0,
    };

    fn ride(self, minutes: f64) -> Self {
        Self {
            minutes: self.minutes + minutes,
            changes: self.changes,
        }
    }

    fn change(self, change_time: f64) -> Self {
        Self {
            minutes: self.minutes + change_time,
            changes: self.changes + 1,
        }
    }
}

/// The order in which accumulated costs are minimised.
trait Criterion {
    const NAME: &'static str;

    fn compare(a: &Cost, b: &Cost) -> Ordering;
}

struct FastestTime;

impl Criterion for FastestTime {
    const NAME: &'static str = "shortest_time";

    fn compare(a: &Cost, b: &Cost) -> Ordering {
        a.minutes.total_cmp(&b.minutes)
    }
}

struct FewestChanges;

impl Criterion for FewestChanges {
    const NAME: &'static str = "least_amount_of_changes";

    fn compare(a: &Cost, b: &Cost) -> Ordering {
        a.changes
            .cmp(&b.changes)
            .then_with(|| a.minutes.total_cmp(&b.minutes))
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the cheapest first.
struct Candidate<C> {
    cost: Cost,
    node: StationNode,
    criterion: PhantomData<C>,
}

impl<C> Candidate<C> {
    fn new(node: StationNode, cost: Cost) -> Self {
        Self {
            cost,
            node,
            criterion: PhantomData,
        }
    }
}

impl<C: Criterion> Ord for Candidate<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost for a min-heap. Ties fall back to the node so the
        // pop order never depends on insertion order.
        C::compare(&other.cost, &self.cost).then_with(|| other.node.cmp(&self.node))
    }
}

impl<C: Criterion> PartialOrd for Candidate<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Criterion> PartialEq for Candidate<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Criterion> Eq for Candidate<C> {}

fn search<C: Criterion>(
    graph: &NetworkGraph,
    change_time: f64,
    start: &str,
    goal: &str,
) -> RouteResult {
    let mut best: HashMap<StationNode, Cost> = HashMap::new();
    let mut previous: HashMap<StationNode, StationNode> = HashMap::new();
    let mut settled: HashSet<StationNode> = HashSet::new();
    let mut frontier: BinaryHeap<Candidate<C>> = BinaryHeap::new();

    // A traveller may begin on any line serving the start station.
    let start_station = Station::new(start);
    for line in graph.lines_at(start) {
        let node = StationNode::new(start_station.clone(), line.clone());
        best.insert(node.clone(), Cost::ZERO);
        frontier.push(Candidate::new(node, Cost::ZERO));
    }

    let mut reached = None;
    while let Some(Candidate { node, cost, .. }) = frontier.pop() {
        // Only the cheapest entry for a state is expanded; later ones are stale.
        if !settled.insert(node.clone()) {
            continue;
        }

        if node.station.as_str() == goal {
            reached = Some((node, cost));
            break;
        }

        trace!(
            station = %node.station,
            line = %node.line,
            minutes = cost.minutes,
            changes = cost.changes,
            "Expanding state"
        );

        for edge in graph.neighbours(node.station.as_str()) {
            let (next, next_cost) = if edge.line == node.line {
                (
                    StationNode::new(edge.to.clone(), node.line.clone()),
                    cost.ride(edge.minutes),
                )
            } else {
                (
                    StationNode::new(node.station.clone(), edge.line.clone()),
                    cost.change(change_time),
                )
            };

            if settled.contains(&next) {
                continue;
            }

            let improves = best
                .get(&next)
                .is_none_or(|known| C::compare(&next_cost, known) == Ordering::Less);
            if improves {
                best.insert(next.clone(), next_cost);
                previous.insert(next.clone(), node.clone());
                frontier.push(Candidate::new(next, next_cost));
            }
        }
    }

    let Some((goal_node, cost)) = reached else {
        debug!(
            search = C::NAME,
            start,
            goal,
            settled = settled.len(),
            "No route found"
        );
        return RouteResult::no_route();
    };

    let result = RouteResult::new(reconstruct(goal_node, &previous), cost.minutes);
    debug_assert_eq!(result.changes, cost.changes);

    debug!(
        search = C::NAME,
        start,
        goal,
        settled = settled.len(),
        minutes = result.total_minutes,
        changes = result.changes,
        "Route found"
    );
    result
}

/// Follow predecessor links back to a start state, returning start-to-goal order.
fn reconstruct(goal: StationNode, previous: &HashMap<StationNode, StationNode>) -> Vec<StationNode> {
    let mut path = vec![goal];
    while let Some(prev) = path.last().and_then(|node| previous.get(node)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}
