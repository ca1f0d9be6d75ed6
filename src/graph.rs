use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::campus::{CampusMap, NodeId};

/// Physical classification of a campus edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    #[default]
    Normal,
    MainRoad,
    Stairs,
    Elevator,
}

/// Directed adjacency entry derived from an undirected edge record.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Adjacency index used by the pathfinder.
///
/// Holds two directed entries per undirected edge record, with identical
/// weight and kind in both directions. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Return the neighbours for a given node identifier.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Base (unscaled) weight of the edge joining two adjacent nodes, the
    /// smallest when parallel edges exist. `None` when the nodes are not
    /// adjacent.
    pub fn base_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }
}

/// Build the adjacency index from the validated campus map.
///
/// Deterministic for identical input edge order; edge validation has already
/// happened in [`CampusMap::from_data`].
pub fn build_graph(map: &CampusMap) -> Graph {
    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();
    for id in map.nodes.keys() {
        adjacency.entry(id.clone()).or_default();
    }

    for record in &map.edges {
        adjacency.entry(record.from.clone()).or_default().push(Edge {
            target: record.to.clone(),
            weight: record.weight,
            kind: record.kind,
        });
        adjacency.entry(record.to.clone()).or_default().push(Edge {
            target: record.from.clone(),
            weight: record.weight,
            kind: record.kind,
        });
    }

    debug!(
        "adjacency built: {} nodes, {} directed entries",
        adjacency.len(),
        adjacency.values().map(Vec::len).sum::<usize>()
    );

    Graph {
        adjacency: Arc::new(adjacency),
    }
}
