use tracing::debug;

use crate::campus::{CampusData, CampusMap, NodeId};
use crate::error::Result;
use crate::graph::{build_graph, Graph};
use crate::policy::RouteType;
use crate::resolver::Endpoint;
use crate::route::{compute_route, RouteRequest, RouteResult};

/// Owner of the per-request mutable routing state.
///
/// The campus map and adjacency index are built once at construction and
/// never mutated. Only the selected endpoints, route type, and last computed
/// result change between requests; recomputing overwrites the previous
/// result, so a stale route is never observable after a newer request
/// completes.
#[derive(Debug, Clone)]
pub struct RouteController {
    map: CampusMap,
    graph: Graph,
    start: Option<Endpoint>,
    goal: Option<Endpoint>,
    route_type: RouteType,
    result: Option<RouteResult>,
}

impl RouteController {
    /// Validate the dataset and build the read-only graph state.
    pub fn new(data: CampusData) -> Result<Self> {
        let map = CampusMap::from_data(data)?;
        let graph = build_graph(&map);
        Ok(Self {
            map,
            graph,
            start: None,
            goal: None,
            route_type: RouteType::default(),
            result: None,
        })
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn set_start(&mut self, endpoint: Endpoint) {
        self.start = Some(endpoint);
    }

    pub fn set_goal(&mut self, endpoint: Endpoint) {
        self.goal = Some(endpoint);
    }

    pub fn set_route_type(&mut self, route_type: RouteType) {
        self.route_type = route_type;
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    /// Drop the selections and any computed result.
    pub fn clear(&mut self) {
        self.start = None;
        self.goal = None;
        self.result = None;
    }

    /// Recompute the route for the current selections, overwriting any
    /// previous result.
    ///
    /// Returns `Ok(false)` without touching the stored result when either
    /// endpoint is unset; resolution failures for selected endpoints
    /// propagate as errors instead of being swallowed.
    pub fn compute(&mut self) -> Result<bool> {
        let (Some(start), Some(goal)) = (self.start.clone(), self.goal.clone()) else {
            debug!("route computation skipped: endpoint not selected");
            return Ok(false);
        };

        let request = RouteRequest::new(start, goal, self.route_type);
        self.result = Some(compute_route(&self.map, &self.graph, &request)?);
        Ok(true)
    }

    /// Ordered node ids of the last computed route; empty before any
    /// computation or when no route exists.
    pub fn route_nodes(&self) -> &[NodeId] {
        self.result
            .as_ref()
            .map(|result| result.nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Total base-weight length of the last computed route.
    pub fn route_length(&self) -> f64 {
        self.result.as_ref().map(|result| result.length).unwrap_or(0.0)
    }

    /// Narration for the last computed route.
    pub fn directions(&self) -> &[String] {
        self.result
            .as_ref()
            .map(|result| result.directions.as_slice())
            .unwrap_or(&[])
    }

    /// Coordinates of the last computed route, in node order.
    pub fn polyline(&self) -> &[(f64, f64)] {
        self.result
            .as_ref()
            .map(|result| result.polyline.as_slice())
            .unwrap_or(&[])
    }
}
