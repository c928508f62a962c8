//! In-memory session directory.
//!
//! [`MemoryDirectory`] is the reference implementation of the
//! [`SessionDirectory`] contract: a node-local registry backed by a key-ordered
//! map, with server-side continuation tokens for scans. It is a registry, not
//! a persistence layer; nothing survives the process.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::config::DirectoryConfig;
use crate::context::Context;
use crate::directory::{ScanPage, SessionDirectory};
use crate::error::{Error, Result};
use crate::geo::GeoCoordinates;
use crate::node::Node;
use crate::options::CreateSessionOptions;
use crate::types::{Session, SessionResources};

/// A stored session with the directory-side bookkeeping collaborators read.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    /// The session itself.
    pub session: Session,
    /// Location of the owning client, approximated to the node's location
    /// when the creator did not supply one.
    pub client_location: GeoCoordinates,
    /// Expiration as a Unix timestamp (UTC). `None` means the session never
    /// expires.
    pub expires_at: Option<i64>,
    /// Creation time as a Unix timestamp (UTC).
    pub created_at: i64,
}

/// In-memory implementation of [`SessionDirectory`].
///
/// Scan cursors are opaque tokens allocated per page and consumed by the call
/// that presents them; 0 is reserved as the start/end sentinel. Scans resume
/// strictly after the last key served, so insertions and removals during a
/// scan are tolerated (weak consistency).
pub struct MemoryDirectory {
    node: Node,
    config: DirectoryConfig,
    sessions: RwLock<BTreeMap<String, SessionEntry>>,
    cursors: Mutex<HashMap<u64, String>>,
    next_cursor: AtomicU64,
}

impl MemoryDirectory {
    /// Create a directory for `node` with the default configuration.
    pub fn new(node: Node) -> Self {
        Self::with_config(node, DirectoryConfig::default())
    }

    /// Create a directory for `node` with an explicit configuration.
    pub fn with_config(node: Node, config: DirectoryConfig) -> Self {
        Self {
            node,
            config,
            sessions: RwLock::new(BTreeMap::new()),
            cursors: Mutex::new(HashMap::new()),
            next_cursor: AtomicU64::new(1),
        }
    }

    /// The node this directory registers sessions for.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Look up a stored session.
    pub async fn get(&self, session_id: &str) -> Option<SessionEntry> {
        self.sessions.read().await.get(session_id).cloned()
    }

    /// Remove a session, returning its entry if it was registered.
    pub async fn remove(&self, session_id: &str) -> Option<SessionEntry> {
        let entry = self.sessions.write().await.remove(session_id);
        if entry.is_some() {
            debug!("Removed session {}", session_id);
        }
        entry
    }

    /// Number of registered sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no sessions are registered.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn generate_id(&self) -> String {
        let id = Uuid::new_v4().to_string();
        match &self.config.id_prefix {
            Some(prefix) => format!("{}{}", prefix, id),
            None => id,
        }
    }
}

#[async_trait]
impl SessionDirectory for MemoryDirectory {
    async fn create_session(
        &self,
        ctx: &Context,
        options: CreateSessionOptions,
    ) -> Result<String> {
        ctx.check()?;

        let session_id = match options.session_id() {
            Some(id) => id.to_string(),
            None => self.generate_id(),
        };

        let mut sessions = self.sessions.write().await;
        // The lock wait may outlive the context.
        ctx.check()?;

        if sessions.contains_key(&session_id) {
            return Err(Error::SessionExists(session_id));
        }

        let client_location = options
            .client_geo_coordinates()
            .unwrap_or(self.node.geo);
        let resources = SessionResources {
            storage: options.storage_resources().unwrap_or_default(),
            computational: options.computational_resources().unwrap_or_default(),
        };

        let session = Session::new(session_id.clone(), self.node.id.clone(), resources);
        sessions.insert(
            session_id.clone(),
            SessionEntry {
                session,
                client_location,
                expires_at: options.expires_at(),
                created_at: Utc::now().timestamp(),
            },
        );

        debug!("Created session {} on node {}", session_id, self.node.id);
        Ok(session_id)
    }

    async fn scan_sessions(&self, ctx: &Context, cursor: u64, count: usize) -> Result<ScanPage> {
        ctx.check()?;

        if count == 0 {
            return Ok(ScanPage {
                ids: Vec::new(),
                next_cursor: cursor,
            });
        }
        let count = count.min(self.config.max_scan_count);

        // A presented cursor is consumed whether or not the page succeeds.
        let resume_after = if cursor == 0 {
            None
        } else {
            let mut cursors = self.cursors.lock().await;
            Some(cursors.remove(&cursor).ok_or(Error::InvalidCursor(cursor))?)
        };

        let (ids, has_more) = {
            let sessions = self.sessions.read().await;
            let mut keys: Box<dyn Iterator<Item = &String> + '_> = match resume_after.as_deref() {
                Some(last) => Box::new(
                    sessions
                        .range::<str, _>((Bound::Excluded(last), Bound::Unbounded))
                        .map(|(id, _)| id),
                ),
                None => Box::new(sessions.keys()),
            };

            let mut ids = Vec::new();
            for id in keys.by_ref().take(count) {
                ids.push(id.clone());
            }
            let has_more = keys.next().is_some();
            (ids, has_more)
        };

        let next_cursor = match (has_more, ids.last()) {
            (true, Some(last)) => {
                let token = self.next_cursor.fetch_add(1, Ordering::Relaxed);
                self.cursors.lock().await.insert(token, last.clone());
                token
            }
            _ => 0,
        };

        debug!(
            "Scanned {} session ids (cursor {} -> {})",
            ids.len(),
            cursor,
            next_cursor
        );
        Ok(ScanPage { ids, next_cursor })
    }
}
