use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::User,
        dto::{
            request::PaginationParams,
            response::{CompletionDto, PaginatedResponse, QuizDto},
        },
    },
    repositories::{page_offset, CompletionRepository, QuizRepository},
};

/// Paginated views over the quiz catalogue and the caller's completions.
pub struct ListingService {
    quiz_repository: Arc<dyn QuizRepository>,
    completion_repository: Arc<dyn CompletionRepository>,
    default_page_size: i64,
}

impl ListingService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        completion_repository: Arc<dyn CompletionRepository>,
        default_page_size: i64,
    ) -> Self {
        Self {
            quiz_repository,
            completion_repository,
            default_page_size,
        }
    }

    /// Every quiz is visible to every authenticated user, answers stripped.
    pub async fn list_quizzes(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<QuizDto>> {
        params.validate()?;
        let page = params.page();
        let page_size = params.page_size(self.default_page_size);
        page_offset(page, page_size)?;

        let (quizzes, total) = self
            .quiz_repository
            .list_quizzes(page, page_size, params.sort_by_field())
            .await?;

        let data = quizzes.into_iter().map(QuizDto::from).collect();
        Ok(PaginatedResponse::new(data, page, page_size, total))
    }

    /// Completions recorded for `caller` only, newest first.
    pub async fn list_completions(
        &self,
        caller: &User,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<CompletionDto>> {
        params.validate()?;
        let page = params.page();
        let page_size = params.page_size(self.default_page_size);
        page_offset(page, page_size)?;

        let (records, total) = self
            .completion_repository
            .find_all_by_user(caller.id, page, page_size)
            .await?;

        let data = records.into_iter().map(CompletionDto::from).collect();
        Ok(PaginatedResponse::new(data, page, page_size, total))
    }
}
