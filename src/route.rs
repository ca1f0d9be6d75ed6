use serde::Serialize;
use tracing::debug;

use crate::campus::{CampusMap, NodeId};
use crate::directions::{route_length, synthesize_directions};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::find_path;
use crate::policy::RouteType;
use crate::resolver::{endpoint_label, resolve_endpoint, Endpoint};

/// High-level route computation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: Endpoint,
    pub goal: Endpoint,
    pub route_type: RouteType,
}

impl RouteRequest {
    pub fn new(start: Endpoint, goal: Endpoint, route_type: RouteType) -> Self {
        Self {
            start,
            goal,
            route_type,
        }
    }

    /// Convenience constructor for building-to-building routes.
    pub fn between_buildings(
        start: impl Into<String>,
        goal: impl Into<String>,
        route_type: RouteType,
    ) -> Self {
        Self {
            start: Endpoint::Building(start.into()),
            goal: Endpoint::Building(goal.into()),
            route_type,
        }
    }
}

/// Computed route handed back to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Ordered node ids; empty when no route exists.
    pub nodes: Vec<NodeId>,
    /// Sum of base edge weights along `nodes`; zero for fewer than two nodes.
    pub length: f64,
    /// Narration strings; empty iff `nodes` is empty.
    pub directions: Vec<String>,
    /// Per-node coordinates in `nodes` order, for polyline rendering.
    pub polyline: Vec<(f64, f64)>,
}

impl RouteResult {
    /// Negative outcome for a disconnected start/goal pair.
    fn no_route() -> Self {
        Self {
            nodes: Vec::new(),
            length: 0.0,
            directions: Vec::new(),
            polyline: Vec::new(),
        }
    }

    /// True when the request produced no route.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Compute a route: resolve both endpoints, search under the requested
/// policy, then derive length, narration, and the rendering polyline.
///
/// A disconnected pair is a normal outcome and yields an empty result.
/// Resolution and configuration failures are reported as errors before any
/// search runs.
pub fn compute_route(map: &CampusMap, graph: &Graph, request: &RouteRequest) -> Result<RouteResult> {
    let start_node = resolve_endpoint(map, &request.start)?;
    let goal_node = resolve_endpoint(map, &request.goal)?;

    for node in [&start_node, &goal_node] {
        if !map.contains_node(node) {
            return Err(Error::UnknownNode { id: node.clone() });
        }
    }

    let Some(nodes) = find_path(graph, map, &start_node, &goal_node, request.route_type) else {
        debug!(
            "no route between {start_node} and {goal_node} ({})",
            request.route_type
        );
        return Ok(RouteResult::no_route());
    };

    let length = route_length(graph, &nodes)?;
    let start_label = endpoint_label(map, &request.start, &start_node);
    let goal_label = endpoint_label(map, &request.goal, &goal_node);
    let directions = synthesize_directions(map, &nodes, &start_label, &goal_label);
    let polyline = nodes
        .iter()
        .filter_map(|id| map.node(id))
        .map(|node| (node.x, node.y))
        .collect();

    debug!(
        "route {start_node} -> {goal_node} ({}): {} nodes, {length:.0} m",
        request.route_type,
        nodes.len()
    );

    Ok(RouteResult {
        nodes,
        length,
        directions,
        polyline,
    })
}
