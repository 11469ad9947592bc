//! Graph population: turns user/post records into entities and HAS
//! relationships.
//!
//! Population is all-or-nothing: a post whose owning user was never ingested
//! aborts the run with a `DanglingReference` instead of being skipped, so a
//! partial graph is never reported as valid output.

use serde_json::Value;

use crate::api::{ApiClient, PostRecord, UserRecord};
use crate::error::Result;
use crate::graph::{Entity, EntityType, Graph, RelationshipType};

/// Create one User entity per record.
pub fn ingest_users(graph: &mut Graph, users: &[UserRecord]) -> Result<()> {
    for user in users {
        let data = serde_json::to_value(user).unwrap_or(Value::Null);
        graph.create_entity(user.entity_id(), EntityType::User, data);
        log::debug!("Created entity {}", user.entity_id());
    }
    Ok(())
}

/// Create one Post entity per record and a HAS relationship from the owning
/// user to the post.
///
/// The owner side is passed as a placeholder entity carrying only the
/// conventional id; the graph resolves it against its own mapping, so an
/// owner that was never ingested surfaces as a `DanglingReference` here.
pub fn ingest_posts(graph: &mut Graph, posts: &[PostRecord]) -> Result<()> {
    for post in posts {
        let data = serde_json::to_value(post).unwrap_or(Value::Null);
        let post_entity = graph.create_entity(post.entity_id(), EntityType::Post, data);

        let owner = Entity::new(post.owner_entity_id(), EntityType::User, Value::Null);
        graph.create_relationship(&owner, &post_entity, RelationshipType::Has)?;
        log::debug!(
            "Created entity {} and relationship {} -HAS-> {}",
            post.entity_id(),
            post.owner_entity_id(),
            post.entity_id()
        );
    }
    Ok(())
}

/// Fetch both resources and build the full graph: users first, then posts
/// with their owning-user relationships.
pub async fn build_graph(client: &ApiClient) -> Result<Graph> {
    let mut graph = Graph::new();

    let users = client.fetch_users().await?;
    log::info!("Fetched {} users", users.len());
    ingest_users(&mut graph, &users)?;

    let posts = client.fetch_posts().await?;
    log::info!("Fetched {} posts", posts.len());
    ingest_posts(&mut graph, &posts)?;

    log::info!(
        "Graph populated: {} entities, {} relationships",
        graph.entity_count(),
        graph.relationship_count()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostgraphError;
    use crate::graph::Endpoint;

    fn users(n: u64) -> Vec<UserRecord> {
        (1..=n)
            .map(|id| UserRecord {
                id,
                name: format!("User {id}"),
                username: format!("user{id}"),
                email: format!("user{id}@example.com"),
            })
            .collect()
    }

    fn posts_owned_by(owners: &[u64]) -> Vec<PostRecord> {
        owners
            .iter()
            .enumerate()
            .map(|(i, &owner)| PostRecord {
                id: (i + 1) as u64,
                user_id: owner,
                title: format!("Post {}", i + 1),
                body: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_ingest_users_creates_one_entity_per_record() {
        let mut graph = Graph::new();
        ingest_users(&mut graph, &users(3)).unwrap();

        assert_eq!(graph.entity_count(), 3);
        let alice = graph.find_entity_by_id("user:1").unwrap();
        assert_eq!(alice.entity_type, EntityType::User);
        assert_eq!(alice.data["name"], "User 1");
    }

    #[test]
    fn test_ingest_full_dataset_links_every_post_to_its_owner() {
        // 10 users, 10 posts, each owned by an existing user
        let mut graph = Graph::new();
        ingest_users(&mut graph, &users(10)).unwrap();
        ingest_posts(&mut graph, &posts_owned_by(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])).unwrap();

        assert_eq!(graph.entity_count(), 20);
        let rels = graph.list_relationships();
        assert_eq!(rels.len(), 10);

        for rel in rels {
            let from = graph.find_entity_by_id(&rel.from).unwrap();
            let to = graph.find_entity_by_id(&rel.to).unwrap();
            assert_eq!(from.entity_type, EntityType::User);
            assert_eq!(to.entity_type, EntityType::Post);
        }
    }

    #[test]
    fn test_ingest_posts_preserves_relationship_order() {
        let mut graph = Graph::new();
        ingest_users(&mut graph, &users(2)).unwrap();
        ingest_posts(&mut graph, &posts_owned_by(&[2, 1, 2])).unwrap();

        let rels = graph.list_relationships();
        assert_eq!(rels[0].from, "user:2");
        assert_eq!(rels[1].from, "user:1");
        assert_eq!(rels[2].to, "post:3");
    }

    #[test]
    fn test_ingest_post_with_missing_owner_fails_fast() {
        let mut graph = Graph::new();
        ingest_users(&mut graph, &users(2)).unwrap();

        // Post 1 is fine; post 2's owner was never created
        let err = ingest_posts(&mut graph, &posts_owned_by(&[1, 99])).unwrap_err();
        match err {
            PostgraphError::DanglingReference { endpoint, id } => {
                assert_eq!(endpoint, Endpoint::From);
                assert_eq!(id, "user:99");
            }
            other => panic!("expected DanglingReference, got {other:?}"),
        }

        // The failing record appended no relationship
        assert_eq!(graph.relationship_count(), 1);
    }

    #[test]
    fn test_ingest_posts_stores_wire_shape_payload() {
        let mut graph = Graph::new();
        ingest_users(&mut graph, &users(1)).unwrap();
        ingest_posts(&mut graph, &posts_owned_by(&[1])).unwrap();

        let post = graph.find_entity_by_id("post:1").unwrap();
        assert_eq!(post.data["userId"], 1);
        assert_eq!(post.data["title"], "Post 1");
    }
}
