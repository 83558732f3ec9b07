use json_patch::PatchOperation;
use serde::Serialize;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{domain::Quiz, dto::request::QuizRequest},
};

/// The document a quiz patch is written against. The owner is not part of it.
#[derive(Debug, Serialize)]
struct QuizDocument<'a> {
    id: i64,
    title: &'a str,
    text: &'a str,
    options: &'a [String],
    answer: &'a std::collections::BTreeSet<i32>,
}

impl<'a> From<&'a Quiz> for QuizDocument<'a> {
    fn from(quiz: &'a Quiz) -> Self {
        QuizDocument {
            id: quiz.id,
            title: &quiz.title,
            text: &quiz.text,
            options: &quiz.options,
            answer: &quiz.answer,
        }
    }
}

/// Applies `operations` to `current` and returns the fully validated result.
///
/// The patched document goes through the same validation as a newly created
/// quiz. The id is pinned to `current.id` and the owner is set to `owner_id`
/// whatever the patch wrote. `current` is never modified; any failure leaves
/// nothing to persist.
pub fn merge_quiz_patch(
    operations: &[PatchOperation],
    current: &Quiz,
    owner_id: i64,
) -> AppResult<Quiz> {
    let mut document = serde_json::to_value(QuizDocument::from(current))?;
    json_patch::patch(&mut document, operations)?;

    let request: QuizRequest = serde_json::from_value(document)?;
    request.validate()?;

    let mut quiz = Quiz::from_request(request, owner_id);
    quiz.id = current.id;
    Ok(quiz)
}
