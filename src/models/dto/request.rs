use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+@.+\..+$").expect("EMAIL_REGEX is a valid regex pattern"));

pub const MAX_ANSWERS: usize = 4;
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Quiz fields accepted on create and replace, and the shape a patched
/// document must deserialize into.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct QuizRequest {
    #[serde(default)]
    #[validate(custom(function = not_blank, message = "Title must not be blank!"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = not_blank, message = "The question field is blank!"))]
    pub text: String,

    #[serde(default)]
    #[validate(length(min = 2, max = 4, message = "There must be 2 to 4 options!"))]
    pub options: Vec<String>,

    #[serde(default)]
    #[validate(custom(
        function = at_most_four_answers,
        message = "There can be at most 4 correct answers!"
    ))]
    pub answer: BTreeSet<i32>,
}

/// Body of a solve request. Duplicates collapse, order is irrelevant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: BTreeSet<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 5, message = "The password must have at least 5 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0, message = "Page index must not be negative"))]
    pub page: Option<i64>,

    #[serde(alias = "pageSize")]
    #[validate(range(min = 1, max = 1000, message = "Page size must be between 1 and 1000"))]
    pub page_size: Option<i64>,

    #[serde(alias = "sortByField")]
    pub sort_by_field: Option<String>,
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0)
    }

    pub fn page_size(&self, default_size: i64) -> i64 {
        self.page_size.unwrap_or(default_size)
    }

    pub fn sort_by_field(&self) -> &str {
        self.sort_by_field.as_deref().unwrap_or("id")
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn at_most_four_answers(answer: &BTreeSet<i32>) -> Result<(), ValidationError> {
    if answer.len() > MAX_ANSWERS {
        return Err(ValidationError::new("too_many_answers"));
    }
    Ok(())
}
