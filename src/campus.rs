use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::EdgeKind;

/// String identifier for a node on the schematic campus plane.
pub type NodeId = String;

/// Minimum Jaro-Winkler similarity before a name is offered as a suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.7;

/// A point on the schematic campus plane.
///
/// Coordinates serve both the search heuristic and turn-angle geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    /// Straight-line distance to another node.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Human-facing name: the label when present, the id otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Undirected physical connector between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    #[serde(default)]
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
}

/// A room inside a building, anchored to a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub building_id: String,
    pub room_number: String,
    pub name: String,
    pub anchor_node_id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    pub id: String,
    pub name: String,
    pub building_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_id: Option<String>,
}

/// Raw campus dataset as supplied by configuration.
///
/// Rooms, labs, and people are optional; a minimal dataset carries only
/// nodes, edges, buildings, and building anchors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusData {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub labs: Vec<Lab>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub building_anchors: HashMap<String, NodeId>,
}

/// Validated, immutable in-memory campus model.
///
/// Built once at startup and treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    pub nodes: HashMap<NodeId, Node>,
    pub edges: Vec<EdgeRecord>,
    pub buildings: HashMap<String, Building>,
    pub rooms: HashMap<String, Room>,
    pub labs: HashMap<String, Lab>,
    pub people: HashMap<String, Person>,
    pub building_anchors: HashMap<String, NodeId>,
}

impl CampusMap {
    /// Validate a raw dataset and index it for lookup.
    ///
    /// Rejects edges referencing unknown nodes, non-positive edge weights,
    /// and building or room anchors pointing at nodes that do not exist.
    pub fn from_data(data: CampusData) -> Result<Self> {
        let nodes: HashMap<NodeId, Node> = data
            .nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();

        for edge in &data.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !nodes.contains_key(endpoint) {
                    return Err(Error::EdgeEndpointMissing {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
            if edge.weight <= 0.0 {
                return Err(Error::NonPositiveEdgeWeight {
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            }
        }

        for (building_id, node_id) in &data.building_anchors {
            if !nodes.contains_key(node_id) {
                return Err(Error::AnchorMissingNode {
                    owner: building_id.clone(),
                    node: node_id.clone(),
                });
            }
        }
        for room in &data.rooms {
            if !nodes.contains_key(&room.anchor_node_id) {
                return Err(Error::AnchorMissingNode {
                    owner: room.id.clone(),
                    node: room.anchor_node_id.clone(),
                });
            }
        }

        debug!(
            "campus map validated: {} nodes, {} edges, {} buildings",
            nodes.len(),
            data.edges.len(),
            data.buildings.len()
        );

        Ok(Self {
            nodes,
            edges: data.edges,
            buildings: data
                .buildings
                .into_iter()
                .map(|building| (building.id.clone(), building))
                .collect(),
            rooms: data
                .rooms
                .into_iter()
                .map(|room| (room.id.clone(), room))
                .collect(),
            labs: data.labs.into_iter().map(|lab| (lab.id.clone(), lab)).collect(),
            people: data
                .people
                .into_iter()
                .map(|person| (person.id.clone(), person))
                .collect(),
            building_anchors: data.building_anchors,
        })
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.get(id)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn lab(&self, id: &str) -> Option<&Lab> {
        self.labs.get(id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Anchor node for a building, when one is mapped.
    pub fn building_anchor(&self, building_id: &str) -> Option<&NodeId> {
        self.building_anchors.get(building_id)
    }

    /// Identifiers and names similar to `query`, used for "did you mean"
    /// suggestions when endpoint resolution fails.
    pub fn fuzzy_location_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .suggestion_candidates()
            .map(|candidate| (strsim::jaro_winkler(query, candidate), candidate))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let mut matches: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if matches.iter().any(|existing| existing == candidate) {
                continue;
            }
            matches.push(candidate.to_string());
            if matches.len() == limit {
                break;
            }
        }
        matches
    }

    fn suggestion_candidates(&self) -> impl Iterator<Item = &str> {
        let buildings = self
            .buildings
            .values()
            .flat_map(|b| [b.id.as_str(), b.name.as_str()]);
        let rooms = self
            .rooms
            .values()
            .flat_map(|r| [r.id.as_str(), r.name.as_str()]);
        let labs = self
            .labs
            .values()
            .flat_map(|l| [l.id.as_str(), l.name.as_str()]);
        let people = self
            .people
            .values()
            .flat_map(|p| [p.id.as_str(), p.name.as_str()]);
        let nodes = self.nodes.values().map(|n| n.id.as_str());
        buildings.chain(rooms).chain(labs).chain(people).chain(nodes)
    }
}
