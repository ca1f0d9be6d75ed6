use thiserror::Error;

/// Convenient result alias for the campus routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a building, room, or person identifier has no mapped
    /// anchor node anywhere in its resolution chain.
    #[error("unresolved endpoint: {endpoint}{}", format_suggestions(.suggestions))]
    UnresolvedEndpoint {
        endpoint: String,
        suggestions: Vec<String>,
    },

    /// Raised when a node identifier is not present in the campus map.
    #[error("unknown node id: {id}")]
    UnknownNode { id: String },

    /// Raised at build time when an edge references a node missing from the
    /// node list.
    #[error("edge {edge} references unknown node {node}")]
    EdgeEndpointMissing { edge: String, node: String },

    /// Raised at build time for an edge whose weight is not strictly positive.
    #[error("edge {edge} has non-positive weight {weight}")]
    NonPositiveEdgeWeight { edge: String, weight: f64 },

    /// Raised at build time when a building or room anchor points at a node
    /// that does not exist.
    #[error("anchor for {owner} references unknown node {node}")]
    AnchorMissingNode { owner: String, node: String },

    /// Raised when a route length is requested for consecutive nodes with no
    /// connecting edge.
    #[error("nodes {from} and {to} are not adjacent")]
    NodesNotAdjacent { from: String, to: String },

    /// Wrapper for JSON dataset parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
