//! Options controlling how a session is created.
//!
//! `CreateSessionOptions` is an immutable value: every field defaults to unset
//! so a directory can tell "not specified" apart from "explicitly zero". The
//! fluent [`CreateSessionOptionsBuilder`] stands in for named optional
//! parameters:
//!
//! ```rust
//! use esd_core::options::CreateSessionOptionsBuilder;
//! use esd_core::resources::Resources;
//!
//! let options = CreateSessionOptionsBuilder::new()
//!     .session_id("sess-42")
//!     .storage_resources(Resources::new(0, 0, 4096))
//!     .expires_in(chrono::Duration::minutes(30))
//!     .build();
//!
//! assert_eq!(options.session_id(), Some("sess-42"));
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::geo::GeoCoordinates;
use crate::resources::Resources;

/// Options that define how a session is created.
///
/// Built once, never mutated afterwards: only read accessors are exposed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSessionOptions {
    /// Location of the client that owns the session. If unset, the client
    /// location is initially approximated to the location of the node that
    /// creates the session.
    client_geo_coordinates: Option<GeoCoordinates>,
    /// Expiration time as a Unix timestamp (UTC). If unset, the session does
    /// not expire.
    expires_at: Option<i64>,
    /// Storage resources consumed by the session.
    storage_resources: Option<Resources>,
    /// Computational resources consumed by the session.
    computational_resources: Option<Resources>,
    /// Session id to use. If unset, the directory generates a fresh one.
    session_id: Option<String>,
}

impl CreateSessionOptions {
    /// Get the client geo coordinates.
    pub fn client_geo_coordinates(&self) -> Option<GeoCoordinates> {
        self.client_geo_coordinates
    }

    /// Get the expiration time.
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }

    /// Get the storage resources.
    pub fn storage_resources(&self) -> Option<Resources> {
        self.storage_resources
    }

    /// Get the computational resources.
    pub fn computational_resources(&self) -> Option<Resources> {
        self.computational_resources
    }

    /// Get the session id.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}

/// Builder for [`CreateSessionOptions`] with a fluent API.
///
/// Setters are chainable and last-write-wins; [`build`](Self::build) hands out
/// a value copy, so the builder stays usable and later changes never reach
/// already-built options.
///
/// Single-owner construction helper: build it up and discard it within one
/// call site, do not share it across tasks.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionOptionsBuilder {
    options: CreateSessionOptions,
}

impl CreateSessionOptionsBuilder {
    /// Create a builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client geo coordinates.
    pub fn client_geo_coordinates(mut self, coordinates: GeoCoordinates) -> Self {
        self.options.client_geo_coordinates = Some(coordinates);
        self
    }

    /// Set the expiration to an absolute point in time.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.options.expires_at = Some(expires_at.timestamp());
        self
    }

    /// Set the expiration to `now + expires_in`, computed at call time.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.options.expires_at = Some((Utc::now() + expires_in).timestamp());
        self
    }

    /// Set the expiration to an absolute Unix timestamp (UTC).
    pub fn expires_at_unix(mut self, expires_at: i64) -> Self {
        self.options.expires_at = Some(expires_at);
        self
    }

    /// Set the expiration to `now + expires_in` seconds, computed at call time.
    pub fn expires_in_secs(mut self, expires_in: i64) -> Self {
        self.options.expires_at = Some(Utc::now().timestamp() + expires_in);
        self
    }

    /// Set the storage resources consumed by the session.
    pub fn storage_resources(mut self, resources: Resources) -> Self {
        self.options.storage_resources = Some(resources);
        self
    }

    /// Set the computational resources consumed by the session.
    pub fn computational_resources(mut self, resources: Resources) -> Self {
        self.options.computational_resources = Some(resources);
        self
    }

    /// Set the session id.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.options.session_id = Some(session_id.into());
        self
    }

    /// Build a value copy of the accumulated options.
    pub fn build(&self) -> CreateSessionOptions {
        self.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_all_unset() {
        let options = CreateSessionOptionsBuilder::new().build();

        assert_eq!(options.client_geo_coordinates(), None);
        assert_eq!(options.expires_at(), None);
        assert_eq!(options.storage_resources(), None);
        assert_eq!(options.computational_resources(), None);
        assert_eq!(options.session_id(), None);
        assert_eq!(options, CreateSessionOptions::default());
    }

    #[test]
    fn test_builder_sets_every_field() {
        let options = CreateSessionOptionsBuilder::new()
            .client_geo_coordinates(GeoCoordinates::new(45.07, 7.69))
            .expires_at_unix(1_900_000_000)
            .storage_resources(Resources::new(0, 0, 4096))
            .computational_resources(Resources::new(500, 1 << 20, 0))
            .session_id("sess-1")
            .build();

        assert_eq!(
            options.client_geo_coordinates(),
            Some(GeoCoordinates::new(45.07, 7.69))
        );
        assert_eq!(options.expires_at(), Some(1_900_000_000));
        assert_eq!(options.storage_resources(), Some(Resources::new(0, 0, 4096)));
        assert_eq!(
            options.computational_resources(),
            Some(Resources::new(500, 1 << 20, 0))
        );
        assert_eq!(options.session_id(), Some("sess-1"));
    }

    #[test]
    fn test_last_write_wins() {
        let options = CreateSessionOptionsBuilder::new()
            .session_id("first")
            .expires_at_unix(100)
            .session_id("second")
            .expires_at_unix(200)
            .build();

        assert_eq!(options.session_id(), Some("second"));
        assert_eq!(options.expires_at(), Some(200));
    }

    #[test]
    fn test_expires_in_computed_at_call_time() {
        let before = Utc::now().timestamp();
        let builder = CreateSessionOptionsBuilder::new().expires_in(Duration::seconds(3600));
        let after = Utc::now().timestamp();

        let expires = builder.build().expires_at().unwrap();
        assert!(expires >= before + 3600);
        assert!(expires <= after + 3600);

        // Building again later returns the stored timestamp, not a fresh one.
        assert_eq!(builder.build().expires_at(), Some(expires));
    }

    #[test]
    fn test_expires_in_secs() {
        let before = Utc::now().timestamp();
        let options = CreateSessionOptionsBuilder::new().expires_in_secs(60).build();
        let after = Utc::now().timestamp();

        let expires = options.expires_at().unwrap();
        assert!(expires >= before + 60);
        assert!(expires <= after + 60);
    }

    #[test]
    fn test_expires_at_absolute() {
        let instant = DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let options = CreateSessionOptionsBuilder::new().expires_at(instant).build();
        assert_eq!(options.expires_at(), Some(instant.timestamp()));
    }

    #[test]
    fn test_built_copies_are_independent() {
        let builder = CreateSessionOptionsBuilder::new().session_id("first");
        let first = builder.build();

        let builder = builder.session_id("second");
        let second = builder.build();

        assert_eq!(first.session_id(), Some("first"));
        assert_eq!(second.session_id(), Some("second"));
    }
}
