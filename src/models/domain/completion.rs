use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records that `user_id` solved `quiz_id`. Written once, never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompletionRecord {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    #[serde(with = "bson_datetime")]
    pub completed_at: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn new(user_id: i64, quiz_id: i64) -> Self {
        CompletionRecord {
            id: 0,
            user_id,
            quiz_id,
            completed_at: Utc::now(),
        }
    }
}

// Stored as a native BSON datetime so the collection sorts chronologically.
mod bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        bson::DateTime::from_millis(value.timestamp_millis()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let stored = bson::DateTime::deserialize(deserializer)?;
        DateTime::from_timestamp_millis(stored.timestamp_millis())
            .ok_or_else(|| de::Error::custom("completion timestamp out of range"))
    }
}
