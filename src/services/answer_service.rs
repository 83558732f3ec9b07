use std::{collections::BTreeSet, sync::Arc};

use crate::{
    auth::AccessGuard,
    errors::AppResult,
    models::{
        domain::{CompletionRecord, User},
        dto::response::QuizResult,
    },
    repositories::{CompletionRepository, QuizRepository},
};

/// Checks submitted answers and records completions.
pub struct AnswerService {
    guard: AccessGuard,
    completion_repository: Arc<dyn CompletionRepository>,
}

impl AnswerService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        completion_repository: Arc<dyn CompletionRepository>,
    ) -> Self {
        Self {
            guard: AccessGuard::new(quiz_repository),
            completion_repository,
        }
    }

    /// Only an exact set match is correct. Every correct submission appends a
    /// new completion record, including repeats by the same user.
    pub async fn check_answer(
        &self,
        quiz_id: i64,
        submitted: &BTreeSet<i32>,
        caller: &User,
    ) -> AppResult<QuizResult> {
        let quiz = self.guard.require(quiz_id, caller, false).await?;

        if quiz.answer != *submitted {
            return Ok(QuizResult::new(false));
        }

        let record = self
            .completion_repository
            .create(CompletionRecord::new(caller.id, quiz_id))
            .await?;
        log::info!(
            "User {} solved quiz {} (completion {})",
            caller.id,
            quiz_id,
            record.id
        );

        Ok(QuizResult::new(true))
    }
}
