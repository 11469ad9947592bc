//! Entity graph module: typed entities, directed relationships, and the
//! in-memory store with creation-time referential-integrity checks.
//!
//! The graph owns a mapping from entity id to entity and an ordered sequence
//! of relationships. Entity payloads are opaque JSON; the graph never
//! interprets them.

mod store;

pub use store::Graph;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PostgraphError;

/// Closed enumeration of entity types stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    User,
    Post,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::User => write!(f, "User"),
            EntityType::Post => write!(f, "Post"),
        }
    }
}

impl FromStr for EntityType {
    type Err = PostgraphError;

    /// Parse an entity type from a raw category string. Untyped sources
    /// (config values, record categories) enter the typed world here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(EntityType::User),
            "Post" => Ok(EntityType::Post),
            other => Err(PostgraphError::InvalidEntityType(other.to_string())),
        }
    }
}

/// Closed enumeration of relationship types. Serialized in SCREAMING case
/// to match the wire convention (`"HAS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipType {
    #[serde(rename = "HAS")]
    Has,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipType::Has => write!(f, "HAS"),
        }
    }
}

/// Which side of a relationship a lookup refers to. Carried by
/// `DanglingReference` errors so the caller knows which endpoint is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::From => write!(f, "from"),
            Endpoint::To => write!(f, "to"),
        }
    }
}

/// A uniquely-identified node in the graph.
///
/// `id` is caller-supplied and globally unique within the graph (convention:
/// `user:<id>` / `post:<id>`, owned by the ingestion layer). `data` is an
/// opaque payload stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub data: Value,
}

impl Entity {
    pub fn new(id: impl Into<String>, entity_type: EntityType, data: Value) -> Self {
        Self {
            id: id.into(),
            entity_type,
            data,
        }
    }
}

/// A directed, typed edge between two entity ids.
///
/// Endpoints are stored by id, not by entity value; a relationship stays
/// valid only because creation checked both ids against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub rel_type: RelationshipType,
}
