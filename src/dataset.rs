//! Campus dataset loading.
//!
//! The engine runs against an in-memory object graph; JSON is the transport
//! for externally supplied datasets. A small demonstration campus is bundled
//! for tests and examples.

use std::collections::HashMap;

use crate::campus::{Building, CampusData, EdgeRecord, Lab, Node, Person, Room};
use crate::error::Result;
use crate::graph::EdgeKind;

/// Parse a campus dataset from its JSON representation.
///
/// Parsing does not validate graph consistency; pass the result to
/// [`CampusMap::from_data`](crate::campus::CampusMap::from_data).
pub fn from_json_str(json: &str) -> Result<CampusData> {
    Ok(serde_json::from_str(json)?)
}

/// The bundled demonstration campus: six nodes along the main walkways,
/// five buildings with anchors, and a handful of rooms, labs, and people.
pub fn demo_campus() -> CampusData {
    let node = |id: &str, x: f64, y: f64, label: &str| Node {
        id: id.to_string(),
        x,
        y,
        label: Some(label.to_string()),
    };
    let edge = |id: &str, from: &str, to: &str, weight: f64, kind: EdgeKind| EdgeRecord {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        weight,
        kind,
    };
    let building = |id: &str, name: &str| Building {
        id: id.to_string(),
        name: name.to_string(),
    };

    CampusData {
        nodes: vec![
            node("N1", 80.0, 200.0, "Gate 11"),
            node("N2", 160.0, 200.0, "Apex Block"),
            node("N3", 240.0, 160.0, "Engineering Sciences Block"),
            node("N4", 320.0, 180.0, "Department of Electrical Sciences Block"),
            node("N5", 400.0, 220.0, "Lecture Hall Complex"),
            node("N6", 280.0, 260.0, "Multipurpose Block"),
        ],
        edges: vec![
            edge("E1", "N1", "N2", 100.0, EdgeKind::MainRoad),
            edge("E2", "N2", "N3", 90.0, EdgeKind::Normal),
            edge("E3", "N3", "N4", 85.0, EdgeKind::Stairs),
            edge("E4", "N4", "N5", 95.0, EdgeKind::Normal),
            edge("E5", "N2", "N6", 120.0, EdgeKind::Elevator),
            edge("E6", "N6", "N5", 80.0, EdgeKind::Normal),
        ],
        buildings: vec![
            building("B1", "Apex Block"),
            building("B2", "Engineering Sciences Block"),
            building("B3", "Department of Electrical Sciences Block"),
            building("B4", "Lecture Hall Complex"),
            building("B5", "Multipurpose Block"),
        ],
        rooms: vec![
            Room {
                id: "R101".to_string(),
                building_id: "B2".to_string(),
                room_number: "101".to_string(),
                name: "Signals Lab".to_string(),
                anchor_node_id: "N3".to_string(),
            },
            Room {
                id: "R204".to_string(),
                building_id: "B4".to_string(),
                room_number: "204".to_string(),
                name: "Seminar Hall".to_string(),
                anchor_node_id: "N5".to_string(),
            },
        ],
        labs: vec![
            Lab {
                id: "L1".to_string(),
                name: "Embedded Systems Lab".to_string(),
                building_id: "B2".to_string(),
                room_id: Some("R101".to_string()),
            },
            Lab {
                id: "L2".to_string(),
                name: "Robotics Lab".to_string(),
                building_id: "B5".to_string(),
                room_id: None,
            },
        ],
        people: vec![
            Person {
                id: "P1".to_string(),
                name: "Asha Iyer".to_string(),
                lab_id: Some("L1".to_string()),
            },
            Person {
                id: "P2".to_string(),
                name: "Rahul Verma".to_string(),
                lab_id: Some("L2".to_string()),
            },
            Person {
                id: "P3".to_string(),
                name: "Meera Nair".to_string(),
                lab_id: None,
            },
        ],
        building_anchors: HashMap::from([
            ("B1".to_string(), "N2".to_string()),
            ("B2".to_string(), "N3".to_string()),
            ("B3".to_string(), "N4".to_string()),
            ("B4".to_string(), "N5".to_string()),
            ("B5".to_string(), "N6".to_string()),
        ]),
    }
}
