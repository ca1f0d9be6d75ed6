//! Campus wayfinding route engine.
//!
//! This crate exposes the in-memory campus model, the policy-weighted A*
//! pathfinder, and the turn-by-turn direction synthesizer. Higher-level
//! consumers (the map UI and its state store) should only depend on the
//! types exported here instead of reimplementing behavior.
//!
//! The campus graph and anchor tables are built once and treated as
//! read-only afterwards; [`RouteController`] owns the only per-request
//! mutable state.

#![deny(warnings)]

pub mod campus;
pub mod controller;
pub mod dataset;
pub mod directions;
pub mod error;
pub mod graph;
pub mod path;
pub mod policy;
pub mod resolver;
pub mod route;

pub use campus::{Building, CampusData, CampusMap, EdgeRecord, Lab, Node, NodeId, Person, Room};
pub use controller::RouteController;
pub use dataset::{demo_campus, from_json_str};
pub use directions::{classify_turn, route_length, synthesize_directions, turn_angle, Turn};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeKind, Graph};
pub use path::find_path;
pub use policy::{effective_cost, heuristic_scale, RouteType};
pub use resolver::{endpoint_label, resolve_endpoint, Endpoint};
pub use route::{compute_route, RouteRequest, RouteResult};
