//! Typed records for the user and post resources, plus the entity-id
//! convention (`user:<id>` / `post:<id>`) that makes cross-type lookups
//! resolve. The graph itself never enforces this convention; it lives here
//! with the records that carry the source ids.

use serde::{Deserialize, Serialize};

/// A raw user record as served by the `/users` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl UserRecord {
    /// Graph entity id for this user (`user:<id>`).
    pub fn entity_id(&self) -> String {
        format!("user:{}", self.id)
    }
}

/// A raw post record as served by the `/posts` resource. `user_id` is the
/// owning user's source id (wire name `userId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PostRecord {
    /// Graph entity id for this post (`post:<id>`).
    pub fn entity_id(&self) -> String {
        format!("post:{}", self.id)
    }

    /// Graph entity id of the user that owns this post (`user:<userId>`).
    pub fn owner_entity_id(&self) -> String {
        format!("user:{}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_deserializes_from_api_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light" }
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.entity_id(), "user:1");
    }

    #[test]
    fn test_post_record_deserializes_user_id_from_camel_case() {
        let json = r#"{ "userId": 1, "id": 10, "title": "Hi", "body": "..." }"#;
        let post: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.entity_id(), "post:10");
        assert_eq!(post.owner_entity_id(), "user:1");
    }

    #[test]
    fn test_records_tolerate_missing_optional_fields() {
        let user: UserRecord = serde_json::from_str(r#"{ "id": 3 }"#).unwrap();
        assert_eq!(user.name, "");

        let post: PostRecord = serde_json::from_str(r#"{ "id": 4, "userId": 3 }"#).unwrap();
        assert_eq!(post.title, "");
    }

    #[test]
    fn test_post_record_serializes_user_id_as_camel_case() {
        let post = PostRecord {
            id: 10,
            user_id: 1,
            title: "Hi".to_string(),
            body: String::new(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["userId"], 1);
        assert!(value.get("user_id").is_none());
    }
}
