use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::QuizRepository,
};

/// Outcome of an accessibility check. `Allowed` carries the quiz that was
/// loaded for the decision so callers do not read it twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessibility {
    Allowed(Quiz),
    NotFound,
    Forbidden,
}

impl Accessibility {
    pub fn into_result(self) -> AppResult<Quiz> {
        match self {
            Accessibility::Allowed(quiz) => Ok(quiz),
            Accessibility::NotFound => Err(AppError::quiz_not_found()),
            Accessibility::Forbidden => Err(AppError::forbidden()),
        }
    }
}

/// Decides whether a principal may read or mutate a quiz.
#[derive(Clone)]
pub struct AccessGuard {
    repository: Arc<dyn QuizRepository>,
}

impl AccessGuard {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Any authenticated principal may read an existing quiz; only its owner
    /// may pass when `require_ownership` is set.
    pub async fn check_accessibility(
        &self,
        quiz_id: i64,
        caller: &User,
        require_ownership: bool,
    ) -> AppResult<Accessibility> {
        let Some(quiz) = self.repository.find_by_id(quiz_id).await? else {
            return Ok(Accessibility::NotFound);
        };

        if require_ownership && !quiz.is_owned_by(caller.id) {
            log::warn!(
                "User {} denied ownership access to quiz {} (owner {})",
                caller.id,
                quiz_id,
                quiz.owner_id
            );
            return Ok(Accessibility::Forbidden);
        }

        Ok(Accessibility::Allowed(quiz))
    }

    pub async fn require(
        &self,
        quiz_id: i64,
        caller: &User,
        require_ownership: bool,
    ) -> AppResult<Quiz> {
        self.check_accessibility(quiz_id, caller, require_ownership)
            .await?
            .into_result()
    }
}
