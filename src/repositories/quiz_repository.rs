use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::page_offset,
};

const QUIZ_SEQUENCE: &str = "quizzes";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;

    /// Persists a new quiz under a freshly assigned id, ignoring `quiz.id`.
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;

    /// Overwrites the stored quiz only while it still exists and is owned by
    /// `quiz.owner_id`. Returns `None` when nothing matched.
    async fn replace_owned(&self, quiz: Quiz) -> AppResult<Option<Quiz>>;

    /// Deletes the quiz only while it is owned by `owner_id`. Returns whether a quiz was removed.
    async fn delete_owned(&self, id: i64, owner_id: i64) -> AppResult<bool>;

    async fn delete_by_owner(&self, owner_id: i64) -> AppResult<u64>;

    /// One page of quizzes sorted ascending by `sort_field`, with the total count.
    async fn list_quizzes(
        &self,
        page: i64,
        page_size: i64,
        sort_field: &str,
    ) -> AppResult<(Vec<Quiz>, i64)>;
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(owner_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(quiz)
    }

    async fn create(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.id = self.db.next_sequence(QUIZ_SEQUENCE).await?;
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn replace_owned(&self, quiz: Quiz) -> AppResult<Option<Quiz>> {
        let result = self
            .collection
            .replace_one(doc! { "_id": quiz.id, "owner_id": quiz.owner_id }, &quiz)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(quiz))
    }

    async fn delete_owned(&self, id: i64, owner_id: i64) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id, "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_by_owner(&self, owner_id: i64) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count)
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

        let mut sort = Document::new();
        sort.insert(field, 1);
        if field != "_id" {
            sort.insert("_id", 1);
        }

        let total = self.collection.count_documents(doc! {}).await? as i64;

        let items: Vec<Quiz> = self
            .collection
            .find(doc! {})
            .sort(sort)
            .skip(page_offset(page, page_size)?)
            .limit(page_size)
            .await?
            .try_collect()
            .await?;

        Ok((items, total))
    }
}
