//! The in-memory entity/relationship store.

use std::collections::HashMap;

use serde_json::Value;

use super::{Endpoint, Entity, EntityType, Relationship, RelationshipType};
use crate::error::{PostgraphError, Result};

/// In-memory directed graph of entities and typed relationships.
///
/// The graph is the sole owner of both collections. Entities live in a map
/// keyed by id (one entity per id); relationships are append-only and keep
/// creation order. The only validation the graph performs is the
/// referential-integrity check in [`Graph::create_relationship`].
///
/// All operations are synchronous and complete atomically with respect to
/// the caller; concurrent ingestion must funnel mutations through a single
/// owner.
#[derive(Debug, Default)]
pub struct Graph {
    entities: HashMap<String, Entity>,
    relationships: Vec<Relationship>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity and insert it into the graph, returning the stored
    /// value. Re-creating an existing id silently overwrites it
    /// (last-write-wins); there is no existence precondition.
    pub fn create_entity(
        &mut self,
        id: impl Into<String>,
        entity_type: EntityType,
        data: Value,
    ) -> Entity {
        let entity = Entity::new(id, entity_type, data);
        self.entities.insert(entity.id.clone(), entity.clone());
        entity
    }

    /// Look up an entity by id. Absence is a normal result, never an error.
    pub fn find_entity_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Create a directed relationship between two entities already present
    /// in the graph.
    ///
    /// Both endpoints are resolved through [`Graph::find_entity_by_id`], not
    /// trusted from the caller-passed values — a placeholder entity carrying
    /// only an id is acceptable input. If either side is missing, fails with
    /// [`PostgraphError::DanglingReference`] naming that side, and nothing
    /// is appended.
    pub fn create_relationship(
        &mut self,
        from: &Entity,
        to: &Entity,
        rel_type: RelationshipType,
    ) -> Result<Relationship> {
        if self.find_entity_by_id(&from.id).is_none() {
            return Err(PostgraphError::DanglingReference {
                endpoint: Endpoint::From,
                id: from.id.clone(),
            });
        }

        if self.find_entity_by_id(&to.id).is_none() {
            return Err(PostgraphError::DanglingReference {
                endpoint: Endpoint::To,
                id: to.id.clone(),
            });
        }

        let relationship = Relationship {
            from: from.id.clone(),
            to: to.id.clone(),
            rel_type,
        };

        self.relationships.push(relationship.clone());

        Ok(relationship)
    }

    /// All relationships in creation order. A read-only view; callers must
    /// not rely on mutating the graph through it.
    pub fn list_relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
