//! Shared wire types for esd-core.
//!
//! These types are serialized for client-facing APIs. The `sessionId` and
//! `host` field names are part of the external contract and must not change.

use serde::{Deserialize, Serialize};

use crate::resources::Resources;

/// A session contained in a node and consuming resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The id of the session.
    pub session_id: String,
    /// The node hosting the session.
    pub host: String,
    /// Resources consumed by the session.
    pub resources: SessionResources,
}

/// The resource consumption record of a session.
///
/// Parts the creator did not request stay at their zero values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResources {
    /// Storage resources consumed by the session.
    pub storage: Resources,
    /// Computational resources consumed by the session.
    pub computational: Resources,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        host: impl Into<String>,
        resources: SessionResources,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            host: host.into(),
            resources,
        }
    }

    /// The token a client holds to address this session.
    pub fn token(&self) -> SessionToken {
        SessionToken::new(self.session_id.clone(), self.host.clone())
    }
}

/// Session token owned by the client holding the session.
///
/// A pure locator: id plus hosting node, no resource data. Immutable once
/// issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    /// The id of the session.
    pub session_id: String,
    /// The node hosting the session.
    pub host: String,
}

impl SessionToken {
    pub fn new(session_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            host: host.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_json_field_names() {
        let session = Session::new("sess-1", "node-a", SessionResources::default());
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["sessionId"], "sess-1");
        assert_eq!(value["host"], "node-a");
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session::new(
            "sess-1",
            "node-a",
            SessionResources {
                storage: Resources::new(0, 0, 4096),
                computational: Resources::new(250, 1 << 20, 0),
            },
        );

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, session);
    }

    #[test]
    fn test_session_token_round_trip() {
        let token = SessionToken::new("sess-2", "node-b");

        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"sessionId\":\"sess-2\""));
        assert!(json.contains("\"host\":\"node-b\""));

        let parsed: SessionToken = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_token_from_session() {
        let session = Session::new("sess-3", "node-c", SessionResources::default());
        let token = session.token();

        assert_eq!(token.session_id, "sess-3");
        assert_eq!(token.host, "node-c");
    }
}
