//! Cluster node identity.

use serde::{Deserialize, Serialize};

use crate::geo::GeoCoordinates;

/// A node able to host sessions.
///
/// The node `id` is the value stamped as `host` on every session the node
/// creates, and the value clients later use to address that session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier.
    pub id: String,
    /// Geographic location of the node.
    pub geo: GeoCoordinates,
}

impl Node {
    pub fn new(id: impl Into<String>, geo: GeoCoordinates) -> Self {
        Self {
            id: id.into(),
            geo,
        }
    }
}
