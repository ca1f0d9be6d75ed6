use crate::campus::{CampusMap, Node, NodeId};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Classified heading change between two consecutive path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Straight,
    SlightLeft,
    SlightRight,
    Left,
    Right,
    SharpLeft,
    SharpRight,
}

impl Turn {
    /// Narration label; `Straight` is suppressed from the output.
    pub fn label(self) -> &'static str {
        match self {
            Turn::Straight => "Continue straight",
            Turn::SlightLeft => "Slight left",
            Turn::SlightRight => "Slight right",
            Turn::Left => "Turn left",
            Turn::Right => "Turn right",
            Turn::SharpLeft => "Sharp left",
            Turn::SharpRight => "Sharp right",
        }
    }
}

/// Signed heading change at `b` when travelling `a -> b -> c`, in degrees.
///
/// The difference between segment headings is normalized to (-180, 180];
/// positive angles turn left.
pub fn turn_angle(a: &Node, b: &Node, c: &Node) -> f64 {
    let incoming = (b.y - a.y).atan2(b.x - a.x);
    let outgoing = (c.y - b.y).atan2(c.x - b.x);

    let mut angle = (outgoing - incoming).to_degrees();
    while angle <= -180.0 {
        angle += 360.0;
    }
    while angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Classify a signed turn angle.
///
/// The 45-degree band edge belongs to the slight class: a perfectly
/// diagonal jog reads as a slight turn, not a full one.
pub fn classify_turn(angle: f64) -> Turn {
    let magnitude = angle.abs();
    if magnitude < 20.0 {
        Turn::Straight
    } else if magnitude <= 45.0 {
        if angle > 0.0 {
            Turn::SlightLeft
        } else {
            Turn::SlightRight
        }
    } else if magnitude < 120.0 {
        if angle > 0.0 {
            Turn::Left
        } else {
            Turn::Right
        }
    } else if angle > 0.0 {
        Turn::SharpLeft
    } else {
        Turn::SharpRight
    }
}

/// Sum of base edge weights between consecutive route nodes.
///
/// Zero for fewer than two nodes. Consecutive nodes without a connecting
/// edge are a caller error, reported rather than skipped.
pub fn route_length(graph: &Graph, nodes: &[NodeId]) -> Result<f64> {
    if nodes.len() < 2 {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for pair in nodes.windows(2) {
        total += graph
            .base_weight(&pair[0], &pair[1])
            .ok_or_else(|| Error::NodesNotAdjacent {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })?;
    }
    Ok(total)
}

/// Convert an ordered node sequence into narration strings.
///
/// Pure function of its inputs: identical sequences always yield identical
/// narration. Interior nodes whose turn classifies as straight emit no
/// instruction.
pub fn synthesize_directions(
    map: &CampusMap,
    nodes: &[NodeId],
    start_label: &str,
    end_label: &str,
) -> Vec<String> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut directions = Vec::new();
    if nodes.len() == 1 {
        directions.push(format!("You are already at {end_label}."));
        return directions;
    }

    match map.node(&nodes[1]) {
        Some(second) => directions.push(format!(
            "Start at {start_label} and head towards {} via {}.",
            second.display_name(),
            nodes[0]
        )),
        None => directions.push(format!("Start at {start_label}.")),
    }

    for window in nodes.windows(3) {
        let (Some(prev), Some(curr), Some(next)) = (
            map.node(&window[0]),
            map.node(&window[1]),
            map.node(&window[2]),
        ) else {
            continue;
        };

        let turn = classify_turn(turn_angle(prev, curr, next));
        if turn == Turn::Straight {
            continue;
        }
        directions.push(format!("{} towards {}.", turn.label(), next.display_name()));
    }

    directions.push(format!("You will reach {end_label}."));
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> Node {
        Node {
            id: id.to_string(),
            x,
            y,
            label: None,
        }
    }

    #[test]
    fn straight_line_has_zero_angle() {
        let angle = turn_angle(
            &node("a", 0.0, 0.0),
            &node("b", 100.0, 0.0),
            &node("c", 200.0, 0.0),
        );
        assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn left_turns_are_positive() {
        let angle = turn_angle(
            &node("a", 0.0, 0.0),
            &node("b", 100.0, 0.0),
            &node("c", 100.0, 100.0),
        );
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn reversal_normalizes_to_positive_half_turn() {
        let angle = turn_angle(
            &node("a", 0.0, 0.0),
            &node("b", 100.0, 0.0),
            &node("c", 0.0, 0.0),
        );
        assert_eq!(angle, 180.0);
    }

    #[test]
    fn classification_bands() {
        assert_eq!(classify_turn(0.0), Turn::Straight);
        assert_eq!(classify_turn(19.9), Turn::Straight);
        assert_eq!(classify_turn(-19.9), Turn::Straight);
        assert_eq!(classify_turn(20.0), Turn::SlightLeft);
        assert_eq!(classify_turn(-30.0), Turn::SlightRight);
        assert_eq!(classify_turn(45.0), Turn::SlightLeft);
        assert_eq!(classify_turn(-45.0), Turn::SlightRight);
        assert_eq!(classify_turn(45.1), Turn::Left);
        assert_eq!(classify_turn(-119.9), Turn::Right);
        assert_eq!(classify_turn(120.0), Turn::SharpLeft);
        assert_eq!(classify_turn(-180.0), Turn::SharpRight);
        assert_eq!(classify_turn(180.0), Turn::SharpLeft);
    }

    #[test]
    fn turn_labels() {
        assert_eq!(Turn::SlightRight.label(), "Slight right");
        assert_eq!(Turn::SharpLeft.label(), "Sharp left");
        assert_eq!(Turn::Straight.label(), "Continue straight");
    }
}
