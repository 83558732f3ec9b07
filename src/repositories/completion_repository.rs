use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database, errors::AppResult, models::domain::CompletionRecord,
    repositories::page_offset,
};

const COMPLETION_SEQUENCE: &str = "completions";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Appends a record under a freshly assigned id. Records are never deduplicated.
    async fn create(&self, record: CompletionRecord) -> AppResult<CompletionRecord>;

    /// One page of the user's records, newest first, with the user's total count.
    async fn find_all_by_user(
        &self,
        user_id: i64,
        page: i64,
        page_size: i64,
    ) -> AppResult<(Vec<CompletionRecord>, i64)>;
}

pub struct MongoCompletionRepository {
    db: Database,
    collection: Collection<CompletionRecord>,
}

impl MongoCompletionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("completions");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for completions collection");

        let user_completed_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "completed_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_completed_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_completed_index).await?;

        log::info!("Successfully created indexes for completions collection");
        Ok(())
    }
}

#[async_trait]
impl CompletionRepository for MongoCompletionRepository {
    async fn create(&self, mut record: CompletionRecord) -> AppResult<CompletionRecord> {
        record.id = self.db.next_sequence(COMPLETION_SEQUENCE).await?;
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_all_by_user(
        &self,
        user_id: i64,
        page: i64,
        page_size: i64,
    ) -> AppResult<(Vec<CompletionRecord>, i64)> {
        let filter = doc! { "user_id": user_id };

        let total = self.collection.count_documents(filter.clone()).await?;

        let records = self
            .collection
            .find(filter)
            .sort(doc! { "completed_at": -1, "_id": -1 })
            .skip(page_offset(page, page_size)?)
            .limit(page_size)
            .await?
            .try_collect()
            .await?;

        Ok((records, total as i64))
    }
}
