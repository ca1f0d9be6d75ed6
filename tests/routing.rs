mod common;

use campus_route::{
    compute_route, Endpoint, Error, RouteController, RouteRequest, RouteType,
};

use common::{demo, demo_with_island};

fn node_request(start: &str, goal: &str, route_type: RouteType) -> RouteRequest {
    RouteRequest::new(
        Endpoint::Node(start.to_string()),
        Endpoint::Node(goal.to_string()),
        route_type,
    )
}

#[test]
fn shortest_route_takes_the_elevator_leg() {
    let (map, graph) = demo();
    let result = compute_route(&map, &graph, &node_request("N2", "N5", RouteType::Shortest))
        .expect("route computes");

    assert_eq!(result.nodes, vec!["N2", "N6", "N5"]);
    assert_eq!(result.length, 200.0);
}

#[test]
fn main_roads_policy_keeps_the_same_path_here() {
    let (map, graph) = demo();
    let result = compute_route(&map, &graph, &node_request("N2", "N5", RouteType::MainRoads))
        .expect("route computes");

    // Effective cost 260 through N6 still beats 351 over the stairs leg.
    assert_eq!(result.nodes, vec!["N2", "N6", "N5"]);
    assert_eq!(result.length, 200.0);
}

#[test]
fn accessible_policy_avoids_the_stairs_leg() {
    let (map, graph) = demo();
    let result = compute_route(&map, &graph, &node_request("N2", "N5", RouteType::Accessible))
        .expect("route computes");

    assert_eq!(result.nodes, vec!["N2", "N6", "N5"]);
    assert_eq!(result.length, 200.0);
}

#[test]
fn repeated_requests_are_deterministic() {
    let (map, graph) = demo();
    let request = node_request("N1", "N5", RouteType::Shortest);

    let first = compute_route(&map, &graph, &request).expect("route computes");
    let second = compute_route(&map, &graph, &request).expect("route computes");

    assert_eq!(first, second);
}

#[test]
fn route_length_is_symmetric() {
    let (map, graph) = demo();
    for (a, b) in [("N1", "N5"), ("N3", "N6"), ("N1", "N4")] {
        let forward = compute_route(&map, &graph, &node_request(a, b, RouteType::Shortest))
            .expect("route computes");
        let backward = compute_route(&map, &graph, &node_request(b, a, RouteType::Shortest))
            .expect("route computes");
        assert_eq!(forward.length, backward.length, "{a} <-> {b}");
    }
}

#[test]
fn degenerate_request_yields_single_node_route() {
    let (map, graph) = demo();
    for route_type in [
        RouteType::Shortest,
        RouteType::MainRoads,
        RouteType::Accessible,
    ] {
        let result = compute_route(&map, &graph, &node_request("N2", "N2", route_type))
            .expect("route computes");
        assert_eq!(result.nodes, vec!["N2"]);
        assert_eq!(result.length, 0.0);
        assert_eq!(result.directions, vec!["You are already at Apex Block."]);
    }
}

#[test]
fn unreachable_pair_is_an_empty_result_not_an_error() {
    let (map, graph) = demo_with_island();
    let result = compute_route(&map, &graph, &node_request("N1", "N9", RouteType::Shortest))
        .expect("no-route is a normal outcome");

    assert!(result.is_empty());
    assert_eq!(result.length, 0.0);
    assert!(result.directions.is_empty());
    assert!(result.polyline.is_empty());
}

#[test]
fn unknown_start_node_fails_fast() {
    let (map, graph) = demo();
    let err = compute_route(&map, &graph, &node_request("N42", "N5", RouteType::Shortest))
        .expect_err("unknown node is a configuration error");
    assert!(matches!(err, Error::UnknownNode { id } if id == "N42"));
}

#[test]
fn polyline_follows_the_node_order() {
    let (map, graph) = demo();
    let result = compute_route(&map, &graph, &node_request("N2", "N5", RouteType::Shortest))
        .expect("route computes");

    assert_eq!(
        result.polyline,
        vec![(160.0, 200.0), (280.0, 260.0), (400.0, 220.0)]
    );
}

#[test]
fn building_to_building_route_uses_anchors() {
    let (map, graph) = demo();
    let request = RouteRequest::between_buildings("B1", "B4", RouteType::Shortest);
    let result = compute_route(&map, &graph, &request).expect("route computes");

    assert_eq!(result.nodes, vec!["N2", "N6", "N5"]);
    assert_eq!(result.length, 200.0);
}

#[test]
fn controller_computes_and_overwrites_results() {
    let mut controller =
        RouteController::new(campus_route::demo_campus()).expect("demo campus is valid");

    controller.set_start(Endpoint::Building("B1".to_string()));
    controller.set_goal(Endpoint::Building("B4".to_string()));
    assert!(controller.compute().expect("route computes"));
    assert_eq!(controller.route_nodes(), ["N2", "N6", "N5"]);
    assert_eq!(controller.route_length(), 200.0);

    // A new goal overwrites the previous result on recompute.
    controller.set_goal(Endpoint::Building("B2".to_string()));
    assert!(controller.compute().expect("route computes"));
    assert_eq!(controller.route_nodes(), ["N2", "N3"]);
    assert_eq!(controller.route_length(), 90.0);
}

#[test]
fn controller_skips_computation_while_endpoints_are_unset() {
    let mut controller =
        RouteController::new(campus_route::demo_campus()).expect("demo campus is valid");

    assert!(!controller.compute().expect("skip is not an error"));
    assert!(controller.route_nodes().is_empty());
    assert_eq!(controller.route_length(), 0.0);
    assert!(controller.directions().is_empty());

    controller.set_start(Endpoint::Node("N1".to_string()));
    assert!(!controller.compute().expect("goal still unset"));
}

#[test]
fn controller_reports_unresolvable_endpoints_instead_of_going_silent() {
    let mut controller =
        RouteController::new(campus_route::demo_campus()).expect("demo campus is valid");

    controller.set_start(Endpoint::Building("B1".to_string()));
    controller.set_goal(Endpoint::Building("B4".to_string()));
    assert!(controller.compute().expect("route computes"));

    controller.set_goal(Endpoint::Person("P3".to_string()));
    let err = controller.compute().expect_err("person without a lab");
    assert!(matches!(err, Error::UnresolvedEndpoint { .. }));

    // The previous result survives a failed request.
    assert_eq!(controller.route_nodes(), ["N2", "N6", "N5"]);
}

#[test]
fn controller_route_type_changes_apply_on_recompute() {
    let mut controller =
        RouteController::new(campus_route::demo_campus()).expect("demo campus is valid");

    controller.set_start(Endpoint::Node("N2".to_string()));
    controller.set_goal(Endpoint::Node("N5".to_string()));
    controller.set_route_type(RouteType::Accessible);
    assert_eq!(controller.route_type(), RouteType::Accessible);

    assert!(controller.compute().expect("route computes"));
    assert_eq!(controller.route_nodes(), ["N2", "N6", "N5"]);

    controller.clear();
    assert!(controller.route_nodes().is_empty());
    assert!(controller.polyline().is_empty());
}

#[test]
fn controller_resolves_people_through_their_labs() {
    let mut controller =
        RouteController::new(campus_route::demo_campus()).expect("demo campus is valid");

    controller.set_start(Endpoint::Node("N1".to_string()));
    controller.set_goal(Endpoint::Person("P2".to_string()));
    assert!(controller.compute().expect("route computes"));

    // P2's lab has no room, so the route ends at the lab building's anchor.
    assert_eq!(controller.route_nodes(), ["N1", "N2", "N6"]);
    assert_eq!(controller.route_length(), 220.0);
}
