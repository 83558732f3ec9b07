use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CompletionRepository, MongoCompletionRepository, MongoQuizRepository,
        MongoUserRepository, QuizRepository, UserRepository,
    },
    services::{AnswerService, ListingService, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub answer_service: Arc<AnswerService>,
    pub listing_service: Arc<ListingService>,
    pub user_service: Arc<UserService>,
    pub config: Arc<Config>,
    /// `None` when the state was assembled from caller-supplied repositories.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let completion_repository = Arc::new(MongoCompletionRepository::new(&db));
        completion_repository.ensure_indexes().await?;

        let mut state = Self::from_repositories(
            quiz_repository,
            user_repository,
            completion_repository,
            config,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the services over any repository implementations.
    pub fn from_repositories(
        quiz_repository: Arc<dyn QuizRepository>,
        user_repository: Arc<dyn UserRepository>,
        completion_repository: Arc<dyn CompletionRepository>,
        config: Config,
    ) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(quiz_repository.clone())),
            answer_service: Arc::new(AnswerService::new(
                quiz_repository.clone(),
                completion_repository.clone(),
            )),
            listing_service: Arc::new(ListingService::new(
                quiz_repository.clone(),
                completion_repository,
                config.default_page_size,
            )),
            user_service: Arc::new(UserService::new(user_repository, quiz_repository)),
            config: Arc::new(config),
            db: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockCompletionRepository, MockQuizRepository, MockUserRepository,
    };

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_repositories_has_no_database() {
        let state = AppState::from_repositories(
            Arc::new(MockQuizRepository::new()),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockCompletionRepository::new()),
            Config::test_config(),
        );

        assert!(state.db.is_none());
        assert_eq!(state.config.default_page_size, 10);
    }
}
