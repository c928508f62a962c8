//! esd-core - Core library for the Edge Session Directory
//!
//! This crate provides the contracts shared by directory implementations and
//! their clients:
//!
//! - **types**: Session and session token wire types
//! - **options**: Immutable creation options and their fluent builder
//! - **directory**: The session directory contract
//! - **memory**: In-memory reference directory
//! - **context**: Cancellation and deadline propagation
//! - **config**: Directory tuning knobs
//! - **geo / resources / node**: Collaborator value types

pub mod config;
pub mod context;
pub mod directory;
pub mod error;
pub mod geo;
pub mod memory;
pub mod node;
pub mod options;
pub mod resources;
pub mod types;

// Re-export commonly used types
pub use config::DirectoryConfig;
pub use context::Context;
pub use directory::{DirectoryNode, ScanPage, SessionDirectory};
pub use error::{Error, Result};
pub use geo::GeoCoordinates;
pub use memory::{MemoryDirectory, SessionEntry};
pub use node::Node;
pub use options::{CreateSessionOptions, CreateSessionOptionsBuilder};
pub use resources::Resources;
pub use types::{Session, SessionResources, SessionToken};
