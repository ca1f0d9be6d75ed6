use crate::campus::{CampusMap, NodeId};
use crate::error::{Error, Result};

/// Requested start or goal of a route, before anchoring to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A graph node named directly.
    Node(NodeId),
    Building(String),
    Room(String),
    Person(String),
}

/// Resolve an endpoint to its anchor node.
///
/// Rooms resolve through their own anchor, buildings through the anchor
/// table, and people through their lab: the lab's room anchor when one is
/// mapped, otherwise the lab's building anchor. A broken chain yields
/// [`Error::UnresolvedEndpoint`]; a default location is never substituted.
pub fn resolve_endpoint(map: &CampusMap, endpoint: &Endpoint) -> Result<NodeId> {
    match endpoint {
        Endpoint::Node(id) => {
            if map.contains_node(id) {
                Ok(id.clone())
            } else {
                Err(Error::UnknownNode { id: id.clone() })
            }
        }
        Endpoint::Room(id) => map
            .room(id)
            .map(|room| room.anchor_node_id.clone())
            .ok_or_else(|| unresolved(map, id)),
        Endpoint::Building(id) => map
            .building_anchor(id)
            .cloned()
            .ok_or_else(|| unresolved(map, id)),
        Endpoint::Person(id) => resolve_person(map, id),
    }
}

fn resolve_person(map: &CampusMap, person_id: &str) -> Result<NodeId> {
    map.person(person_id)
        .and_then(|person| person.lab_id.as_deref())
        .and_then(|lab_id| map.lab(lab_id))
        .and_then(|lab| {
            lab.room_id
                .as_deref()
                .and_then(|room_id| map.room(room_id))
                .map(|room| room.anchor_node_id.clone())
                .or_else(|| map.building_anchor(&lab.building_id).cloned())
        })
        .ok_or_else(|| unresolved(map, person_id))
}

fn unresolved(map: &CampusMap, endpoint: &str) -> Error {
    Error::UnresolvedEndpoint {
        endpoint: endpoint.to_string(),
        suggestions: map.fuzzy_location_matches(endpoint, 3),
    }
}

/// Display label for a resolved endpoint, used by the narration.
///
/// Rooms render as `"<building> - Room <number> (<name>)"`, buildings and
/// people by name; raw nodes fall back to the node label or id.
pub fn endpoint_label(map: &CampusMap, endpoint: &Endpoint, resolved: &str) -> String {
    let named = match endpoint {
        Endpoint::Room(id) => map.room(id).map(|room| {
            let building = map
                .building(&room.building_id)
                .map(|building| building.name.as_str())
                .unwrap_or(room.building_id.as_str());
            format!("{building} - Room {} ({})", room.room_number, room.name)
        }),
        Endpoint::Building(id) => map.building(id).map(|building| building.name.clone()),
        Endpoint::Person(id) => map.person(id).map(|person| person.name.clone()),
        Endpoint::Node(_) => None,
    };

    named.unwrap_or_else(|| {
        map.node(resolved)
            .map(|node| node.display_name().to_string())
            .unwrap_or_else(|| resolved.to_string())
    })
}
