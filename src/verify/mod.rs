//! Graph verification against independently fetched reference data.
//!
//! The verifier re-fetches both resources with its own requests, then checks
//! the populated graph through its read surface only (`find_entity_by_id`
//! per reference record, `list_relationships` once). It never mutates the
//! graph.

use crate::api::{ApiClient, PostRecord, UserRecord};
use crate::error::{PostgraphError, Result};
use crate::graph::{EntityType, Graph};

/// Aggregate verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub entities_ok: bool,
    pub relationships_ok: bool,
    /// Reference records checked (users + posts).
    pub entities_checked: usize,
    /// Relationships checked.
    pub relationships_checked: usize,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.entities_ok && self.relationships_ok
    }
}

/// Cross-checks a populated graph against reference user/post records.
pub struct Verifier {
    users: Vec<UserRecord>,
    posts: Vec<PostRecord>,
}

impl Verifier {
    /// Build a verifier from already-fetched reference records.
    pub fn from_records(users: Vec<UserRecord>, posts: Vec<PostRecord>) -> Self {
        Self { users, posts }
    }

    /// Fetch fresh reference data from the API.
    pub async fn fetch(client: &ApiClient) -> Result<Self> {
        let users = client.fetch_users().await?;
        let posts = client.fetch_posts().await?;
        Ok(Self::from_records(users, posts))
    }

    /// Every reference record must resolve to a stored entity.
    pub fn entities_valid(&self, graph: &Graph) -> bool {
        for user in &self.users {
            let id = user.entity_id();
            if graph.find_entity_by_id(&id).is_none() {
                log::error!("Could not find entity with id: {id}");
                return false;
            }
        }

        for post in &self.posts {
            let id = post.entity_id();
            if graph.find_entity_by_id(&id).is_none() {
                log::error!("Could not find entity with id: {id}");
                return false;
            }
        }

        true
    }

    /// Every relationship endpoint must resolve, with a User on the `from`
    /// side and a Post on the `to` side.
    pub fn relationships_valid(&self, graph: &Graph) -> bool {
        for relationship in graph.list_relationships() {
            let from = match graph.find_entity_by_id(&relationship.from) {
                Some(entity) => entity,
                None => {
                    log::error!(
                        "Could not find (from) entity from relationship with id: {}",
                        relationship.from
                    );
                    return false;
                }
            };

            if from.entity_type != EntityType::User {
                log::error!(
                    "Invalid from type for relationship {}: should be User but is {}",
                    relationship.from,
                    from.entity_type
                );
                return false;
            }

            let to = match graph.find_entity_by_id(&relationship.to) {
                Some(entity) => entity,
                None => {
                    log::error!(
                        "Could not find (to) entity from relationship with id: {}",
                        relationship.to
                    );
                    return false;
                }
            };

            if to.entity_type != EntityType::Post {
                log::error!(
                    "Invalid to type for relationship {}: should be Post but is {}",
                    relationship.to,
                    to.entity_type
                );
                return false;
            }
        }

        true
    }

    /// Run both checks and return the aggregate report.
    pub fn run(&self, graph: &Graph) -> VerifyReport {
        let entities_ok = self.entities_valid(graph);
        if entities_ok {
            log::info!("SUCCESS: all entities are valid!");
        }

        let relationships_ok = self.relationships_valid(graph);
        if relationships_ok {
            log::info!("SUCCESS: all relationships are valid!");
        }

        VerifyReport {
            entities_ok,
            relationships_ok,
            entities_checked: self.users.len() + self.posts.len(),
            relationships_checked: graph.relationship_count(),
        }
    }

    /// Run both checks and turn a failed report into an error for callers
    /// that want the all-or-nothing posture.
    pub fn check(&self, graph: &Graph) -> Result<VerifyReport> {
        let report = self.run(graph);
        if !report.passed() {
            return Err(PostgraphError::Verification(format!(
                "entities_ok={}, relationships_ok={}",
                report.entities_ok, report.relationships_ok
            )));
        }
        Ok(report)
    }
}
