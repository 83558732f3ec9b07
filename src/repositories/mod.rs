pub mod completion_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use completion_repository::{CompletionRepository, MongoCompletionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

use crate::errors::{AppError, AppResult};

#[cfg(test)]
pub use completion_repository::MockCompletionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Number of records to skip before `page`. Fails instead of wrapping when the
/// product does not fit.
pub fn page_offset(page: i64, page_size: i64) -> AppResult<u64> {
    page.checked_mul(page_size)
        .and_then(|offset| u64::try_from(offset).ok())
        .ok_or_else(|| {
            AppError::ValidationError(format!(
                "Page {} of size {} is out of range",
                page, page_size
            ))
        })
}
