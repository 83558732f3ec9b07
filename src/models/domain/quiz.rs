use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::dto::request::QuizRequest;

/// A stored multiple-choice quiz.
///
/// `answer` and `owner_id` are persisted but never leave the service;
/// clients only ever see a [`QuizDto`](crate::models::dto::response::QuizDto).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: i64, // Assigned by the repository on create
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: BTreeSet<i32>, // Indices into `options`, not bounds-checked
    pub owner_id: i64,
}

impl Quiz {
    /// Builds an unsaved quiz; the id is filled in by the repository.
    pub fn from_request(request: QuizRequest, owner_id: i64) -> Self {
        Quiz {
            id: 0,
            title: request.title,
            text: request.text,
            options: request.options,
            answer: request.answer,
            owner_id,
        }
    }

    /// Ownership is decided by comparing stable user ids.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    /// Maps a client-facing sort field onto the stored field name.
    pub fn sort_field(field: &str) -> Option<&'static str> {
        match field {
            "id" => Some("_id"),
            "title" => Some("title"),
            "text" => Some("text"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_sets_owner() {
        let request = QuizRequest {
            title: "Capitals".to_string(),
            text: "Pick EU capitals".to_string(),
            options: vec!["Paris".into(), "Tokyo".into()],
            answer: BTreeSet::from([0]),
        };

        let quiz = Quiz::from_request(request, 7);
        assert_eq!(quiz.id, 0);
        assert_eq!(quiz.owner_id, 7);
        assert!(quiz.is_owned_by(7));
        assert!(!quiz.is_owned_by(8));
    }

    #[test]
    fn test_sort_field_mapping() {
        assert_eq!(Quiz::sort_field("id"), Some("_id"));
        assert_eq!(Quiz::sort_field("title"), Some("title"));
        assert_eq!(Quiz::sort_field("answer"), None);
    }

    #[test]
    fn test_stored_shape_uses_mongo_id() {
        let quiz = Quiz {
            id: 3,
            title: "t".into(),
            text: "q".into(),
            options: vec!["a".into(), "b".into()],
            answer: BTreeSet::from([1]),
            owner_id: 1,
        };

        let value = serde_json::to_value(&quiz).unwrap();
        assert_eq!(value["_id"], 3);
        assert_eq!(value["owner_id"], 1);
    }
}
