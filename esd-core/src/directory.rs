//! The session directory contract.
//!
//! A directory is the registry a node (or a cluster) answers session commands
//! from. This module defines the contract implementations must satisfy and the
//! [`DirectoryNode`] wrapper that pairs a node identity with those commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::node::Node;
use crate::options::CreateSessionOptions;
use crate::types::SessionToken;

/// One page of a cursor-based session scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPage {
    /// Session ids in this page.
    pub ids: Vec<String>,
    /// Cursor to pass to the next call, or 0 when the scan is complete.
    pub next_cursor: u64,
}

impl ScanPage {
    /// True when the scan has nothing further to return.
    pub fn is_last(&self) -> bool {
        self.next_cursor == 0
    }
}

/// Operations a session registry must support.
///
/// Implementations may sit in front of a remote backing store, so every method
/// takes a [`Context`] and must abort with a cancellation error once the
/// context is done. Locking and transaction discipline around the backing
/// store belong to the implementation; the contract itself only guarantees
/// that a created session eventually becomes visible to scans.
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// Creates a new session and returns its id.
    ///
    /// When the options carry a session id it is used verbatim, and creation
    /// fails with [`Error::SessionExists`](crate::Error::SessionExists) if that
    /// id is already taken. Otherwise a fresh unique id is generated. A done
    /// context aborts the call before any side effect.
    async fn create_session(
        &self,
        ctx: &Context,
        options: CreateSessionOptions,
    ) -> Result<String>;

    /// Returns a page of session ids.
    ///
    /// A `cursor` of 0 starts a fresh scan; a non-zero
    /// [`ScanPage::next_cursor`] must be re-supplied to continue, and 0 in that
    /// field signals completion. `count` is an upper bound hint on ids per
    /// page, not a guarantee.
    ///
    /// Scans are weakly consistent: there is no ordering guarantee across
    /// calls, and sessions created or deleted while a scan is in flight may or
    /// may not be reflected. Callers must not assume a snapshot view.
    async fn scan_sessions(&self, ctx: &Context, cursor: u64, count: usize) -> Result<ScanPage>;
}

/// A node paired with the directory commands it answers.
#[derive(Clone)]
pub struct DirectoryNode {
    node: Node,
    commands: Arc<dyn SessionDirectory>,
}

impl DirectoryNode {
    pub fn new(node: Node, commands: Arc<dyn SessionDirectory>) -> Self {
        Self { node, commands }
    }

    /// The identity of this node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The directory commands this node answers.
    pub fn commands(&self) -> &Arc<dyn SessionDirectory> {
        &self.commands
    }

    /// Create a session on this node and hand back the token the client keeps.
    pub async fn create_session(
        &self,
        ctx: &Context,
        options: CreateSessionOptions,
    ) -> Result<SessionToken> {
        let session_id = self.commands.create_session(ctx, options).await?;
        Ok(SessionToken::new(session_id, self.node.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoCoordinates;
    use crate::memory::MemoryDirectory;

    #[tokio::test]
    async fn test_directory_node_issues_token() {
        let node = Node::new("node-b", GeoCoordinates::new(0.0, 0.0));
        let directory = Arc::new(MemoryDirectory::new(node.clone()));
        let directory_node = DirectoryNode::new(node, directory);

        let token = directory_node
            .create_session(&Context::background(), CreateSessionOptions::default())
            .await
            .unwrap();

        assert_eq!(token.host, "node-b");
        assert!(!token.session_id.is_empty());
    }

    #[test]
    fn test_scan_page_is_last() {
        let page = ScanPage {
            ids: vec!["sess-1".into()],
            next_cursor: 0,
        };
        assert!(page.is_last());

        let page = ScanPage {
            ids: vec!["sess-1".into()],
            next_cursor: 7,
        };
        assert!(!page.is_last());
    }
}
