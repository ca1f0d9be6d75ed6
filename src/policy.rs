use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::EdgeKind;

/// User-selected cost policy for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteType {
    /// Minimize base traversal cost.
    #[default]
    Shortest,
    /// Prefer main roads; everything else is penalized.
    MainRoads,
    /// Penalize stairs, prefer elevators.
    Accessible,
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteType::Shortest => "shortest",
            RouteType::MainRoads => "mainRoads",
            RouteType::Accessible => "accessible",
        };
        f.write_str(value)
    }
}

/// Effective traversal cost of one edge under the selected policy.
///
/// Steers the search only; reported route length always sums base weights.
/// Costs are ordered within a single route type and not comparable across
/// route types.
pub fn effective_cost(base_weight: f64, kind: EdgeKind, route_type: RouteType) -> f64 {
    let multiplier = match route_type {
        RouteType::Shortest => 1.0,
        RouteType::MainRoads => match kind {
            EdgeKind::MainRoad => 0.7,
            _ => 1.3,
        },
        RouteType::Accessible => match kind {
            EdgeKind::Stairs => 2.0,
            EdgeKind::Elevator => 0.8,
            _ => 1.0,
        },
    };
    base_weight * multiplier
}

/// Smallest multiplier the policy can apply to any edge.
///
/// The Euclidean heuristic is scaled by this factor so that discounted edges
/// (main roads at 0.7, elevators at 0.8) cannot make the estimate overshoot
/// the policy-weighted cost of the remaining path.
pub fn heuristic_scale(route_type: RouteType) -> f64 {
    match route_type {
        RouteType::Shortest => 1.0,
        RouteType::MainRoads => 0.7,
        RouteType::Accessible => 0.8,
    }
}
