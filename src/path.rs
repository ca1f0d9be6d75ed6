use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::campus::{CampusMap, NodeId};
use crate::graph::Graph;
use crate::policy::{effective_cost, heuristic_scale, RouteType};

/// Run A* search for the minimum-effective-cost path between two nodes.
///
/// The heuristic is straight-line distance between node coordinates, scaled
/// by the policy's minimum edge multiplier (see
/// [`heuristic_scale`](crate::policy::heuristic_scale)). Ties on equal
/// estimate break towards the lower cost-so-far, then the lexically smaller
/// node id, so the result is deterministic.
///
/// Returns `None` when the frontier empties without reaching the goal; that
/// is the expected outcome for a disconnected pair, not an error.
pub fn find_path(
    graph: &Graph,
    map: &CampusMap,
    start: &str,
    goal: &str,
    route_type: RouteType,
) -> Option<Vec<NodeId>> {
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let scale = heuristic_scale(route_type);
    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start.to_string(), 0.0);
    parents.insert(start.to_string(), None);
    queue.push(AStarEntry::new(
        start.to_string(),
        0.0,
        heuristic(map, start, goal, scale),
    ));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(&entry.node) {
            // A better path to this node was found after the entry was queued.
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(&entry.node) {
            let tentative = current_score + effective_cost(edge.weight, edge.kind, route_type);
            if tentative < *g_score.get(&edge.target).unwrap_or(&f64::INFINITY) {
                g_score.insert(edge.target.clone(), tentative);
                parents.insert(edge.target.clone(), Some(entry.node.clone()));
                let estimate = heuristic(map, &edge.target, goal, scale);
                queue.push(AStarEntry::new(edge.target.clone(), tentative, estimate));
            }
        }
    }

    None
}

fn heuristic(map: &CampusMap, from: &str, to: &str, scale: f64) -> f64 {
    match (map.node(from), map.node(to)) {
        (Some(a), Some(b)) => a.distance_to(b) * scale,
        _ => 0.0,
    }
}

fn reconstruct_path(
    parents: &HashMap<NodeId, Option<NodeId>>,
    start: &str,
    goal: &str,
) -> Vec<NodeId> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        match parents.get(current).and_then(|parent| parent.as_deref()) {
            Some(parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest estimate; ties prefer the
        // lower cost-so-far, then the lexically smaller node id.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
