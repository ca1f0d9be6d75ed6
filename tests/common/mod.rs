// Shared fixtures for integration tests.
#![allow(dead_code)]

use campus_route::{build_graph, demo_campus, CampusMap, Graph, Node};

/// Validated demo campus map plus its adjacency index.
pub fn demo() -> (CampusMap, Graph) {
    let map = CampusMap::from_data(demo_campus()).expect("demo campus is valid");
    let graph = build_graph(&map);
    (map, graph)
}

/// Demo campus extended with an island node nothing connects to.
pub fn demo_with_island() -> (CampusMap, Graph) {
    let mut data = demo_campus();
    data.nodes.push(Node {
        id: "N9".to_string(),
        x: 600.0,
        y: 600.0,
        label: Some("Old Observatory".to_string()),
    });
    let map = CampusMap::from_data(data).expect("island campus is valid");
    let graph = build_graph(&map);
    (map, graph)
}
