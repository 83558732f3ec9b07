use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{CompletionRecord, Quiz};

pub const CORRECT_FEEDBACK: &str = "Congratulations, you're right!";
pub const WRONG_FEEDBACK: &str = "Wrong answer! Please, try again.";

/// Client view of a quiz. The correct answer and owner are write-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            title: quiz.title,
            text: quiz.text,
            options: quiz.options,
        }
    }
}

/// Client view of a completion, keyed by the solved quiz's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionDto {
    #[serde(rename = "id")]
    pub quiz_id: i64,
    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,
}

impl From<CompletionRecord> for CompletionDto {
    fn from(record: CompletionRecord) -> Self {
        CompletionDto {
            quiz_id: record.quiz_id,
            completed_at: record.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub success: bool,
    pub feedback: String,
}

impl QuizResult {
    pub fn new(success: bool) -> Self {
        let feedback = if success { CORRECT_FEEDBACK } else { WRONG_FEEDBACK };
        QuizResult {
            success,
            feedback: feedback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMetadata {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let total_pages = if page_size > 0 {
            total / page_size + i64::from(total % page_size != 0)
        } else {
            0
        };

        PaginationMetadata {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        PaginatedResponse {
            data,
            pagination: PaginationMetadata::new(page, page_size, total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUserDto {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
