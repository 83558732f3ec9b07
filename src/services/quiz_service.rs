use std::sync::Arc;

use json_patch::PatchOperation;
use validator::Validate;

use crate::{
    auth::AccessGuard,
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, User},
        dto::{request::QuizRequest, response::QuizDto},
    },
    repositories::QuizRepository,
    services::patch_merger::merge_quiz_patch,
};

/// Reads and mutations of single quizzes, each gated by the [`AccessGuard`].
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    guard: AccessGuard,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        let guard = AccessGuard::new(repository.clone());
        Self { repository, guard }
    }

    pub async fn get_quiz(&self, id: i64, caller: &User) -> AppResult<QuizDto> {
        let quiz = self.guard.require(id, caller, false).await?;
        Ok(quiz.into())
    }

    pub async fn create_quiz(&self, request: QuizRequest, caller: &User) -> AppResult<QuizDto> {
        request.validate()?;

        let quiz = self
            .repository
            .create(Quiz::from_request(request, caller.id))
            .await?;

        log::info!("User {} created quiz {}", caller.id, quiz.id);
        Ok(quiz.into())
    }

    /// Replaces every client-editable field of an owned quiz.
    pub async fn replace_quiz(
        &self,
        id: i64,
        request: QuizRequest,
        caller: &User,
    ) -> AppResult<QuizDto> {
        self.guard.require(id, caller, true).await?;
        request.validate()?;

        let mut quiz = Quiz::from_request(request, caller.id);
        quiz.id = id;

        let quiz = self.save_owned(quiz).await?;
        log::info!("User {} replaced quiz {}", caller.id, id);
        Ok(quiz.into())
    }

    /// Applies a JSON Patch to an owned quiz. Nothing is written unless every
    /// operation applies and the result validates.
    pub async fn patch_quiz(
        &self,
        id: i64,
        operations: &[PatchOperation],
        caller: &User,
    ) -> AppResult<QuizDto> {
        let current = self.guard.require(id, caller, true).await?;
        let patched = merge_quiz_patch(operations, &current, caller.id)?;

        let quiz = self.save_owned(patched).await?;
        log::info!(
            "User {} patched quiz {} with {} operation(s)",
            caller.id,
            id,
            operations.len()
        );
        Ok(quiz.into())
    }

    pub async fn delete_quiz(&self, id: i64, caller: &User) -> AppResult<()> {
        self.guard.require(id, caller, true).await?;

        // The delete re-checks ownership, so a quiz removed or reassigned since
        // the guard ran is reported as missing.
        if !self.repository.delete_owned(id, caller.id).await? {
            return Err(AppError::quiz_not_found());
        }

        log::info!("User {} deleted quiz {}", caller.id, id);
        Ok(())
    }

    async fn save_owned(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.repository
            .replace_owned(quiz)
            .await?
            .ok_or_else(AppError::quiz_not_found)
    }
}
