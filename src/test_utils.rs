pub mod fixtures {
    use std::collections::BTreeSet;

    use crate::models::{domain::Quiz, dto::request::QuizRequest};

    /// A four-option quiz whose correct answer is `{0, 2}`.
    pub fn capitals_request() -> QuizRequest {
        QuizRequest {
            title: "Capitals".to_string(),
            text: "Pick EU capitals".to_string(),
            options: vec![
                "Paris".to_string(),
                "Tokyo".to_string(),
                "Berlin".to_string(),
                "Lima".to_string(),
            ],
            answer: BTreeSet::from([0, 2]),
        }
    }

    pub fn capitals_quiz(id: i64, owner_id: i64) -> Quiz {
        let mut quiz = Quiz::from_request(capitals_request(), owner_id);
        quiz.id = id;
        quiz
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_capitals_quiz_fixture() {
        let quiz = capitals_quiz(3, 7);
        assert_eq!(quiz.id, 3);
        assert_eq!(quiz.owner_id, 7);
        assert_eq!(quiz.options.len(), 4);
        assert!(quiz.is_owned_by(7));
    }
}
