#![allow(dead_code)]

use std::{
    collections::{BTreeSet, HashMap},
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quiz_engine_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult, EMAIL_TAKEN},
    models::{
        domain::{CompletionRecord, Quiz, User},
        dto::request::QuizRequest,
    },
    repositories::{page_offset, CompletionRepository, QuizRepository, UserRepository},
};

fn page_bounds(len: usize, page: i64, page_size: i64) -> AppResult<(usize, usize)> {
    let offset = page_offset(page, page_size)?;
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
    let size = usize::try_from(page_size).unwrap_or(0);
    Ok((start, start.saturating_add(size).min(len)))
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<i64, Quiz>>,
    next_id: AtomicI64,
}

impl InMemoryQuizRepository {
    pub async fn len(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(&id).cloned())
    }

    async fn create(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.quizzes.write().await.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn replace_owned(&self, quiz: Quiz) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(&quiz.id) {
            Some(stored) if stored.owner_id == quiz.owner_id => {
                *stored = quiz.clone();
                Ok(Some(quiz))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: i64, owner_id: i64) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.get(&id).is_some_and(|quiz| quiz.owner_id == owner_id) {
            quizzes.remove(&id);
            return Ok(true);
        }
        Ok(false)
    }

    async fn delete_by_owner(&self, owner_id: i64) -> AppResult<u64> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|_, quiz| quiz.owner_id != owner_id);
        Ok((before - quizzes.len()) as u64)
    }

    async fn list_quizzes(
        &self,
        page: i64,
        page_size: i64,
        sort_field: &str,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        let field = Quiz::sort_field(sort_field).ok_or_else(|| {
            AppError::ValidationError(format!("Cannot sort quizzes by '{}'", sort_field))
        })?;

        let mut items: Vec<Quiz> = self.quizzes.read().await.values().cloned().collect();
        items.sort_by(|a, b| {
            let by_field = match field {
                "title" => a.title.cmp(&b.title),
                "text" => a.text.cmp(&b.text),
                _ => std::cmp::Ordering::Equal,
            };
            by_field.then(a.id.cmp(&b.id))
        });

        let total = items.len() as i64;
        let (start, end) = page_bounds(items.len(), page, page_size)?;
        Ok((items[start..end].to_vec(), total))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.username == user.username) {
            return Err(AppError::AlreadyExists(EMAIL_TAKEN.to_string()));
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.username == username).cloned())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }
}

#[derive(Default)]
pub struct InMemoryCompletionRepository {
    records: RwLock<Vec<CompletionRecord>>,
    next_id: AtomicI64,
}

impl InMemoryCompletionRepository {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl CompletionRepository for InMemoryCompletionRepository {
    async fn create(&self, mut record: CompletionRecord) -> AppResult<CompletionRecord> {
        record.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_all_by_user(
        &self,
        user_id: i64,
        page: i64,
        page_size: i64,
    ) -> AppResult<(Vec<CompletionRecord>, i64)> {
        let mut items: Vec<CompletionRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at).then(b.id.cmp(&a.id)));

        let total = items.len() as i64;
        let (start, end) = page_bounds(items.len(), page, page_size)?;
        Ok((items[start..end].to_vec(), total))
    }
}

/// Repositories shared with the state so tests can inspect what was written.
pub struct TestContext {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub completions: Arc<InMemoryCompletionRepository>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        let quizzes = Arc::new(InMemoryQuizRepository::default());
        let users = Arc::new(InMemoryUserRepository::default());
        let completions = Arc::new(InMemoryCompletionRepository::default());

        let state = AppState::from_repositories(
            quizzes.clone(),
            users.clone(),
            completions.clone(),
            Config::test_config(),
        );

        Self {
            quizzes,
            users,
            completions,
            state: Arc::new(state),
        }
    }

    /// Stores a user directly, skipping password hashing.
    pub async fn user(&self, email: &str) -> User {
        self.users
            .create(User::new(email, "unused-hash"))
            .await
            .expect("user should be created")
    }
}

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
