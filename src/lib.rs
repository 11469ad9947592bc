pub mod api;
pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod verify;

pub use config::Config;
pub use error::{PostgraphError, Result};
pub use graph::{Entity, EntityType, Graph, Relationship, RelationshipType};
