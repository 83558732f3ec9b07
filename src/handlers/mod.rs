pub mod quiz_handler;
pub mod user_handler;

use actix_web::web;

use crate::errors::AppError;

pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, list_completions, list_quizzes, patch_quiz,
    replace_quiz, solve_quiz,
};
pub use user_handler::{delete_me, health_check, health_check_ready, register};

/// Registers every route plus the extractor configs that turn malformed
/// bodies, queries and paths into `AppError` responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(
        web::PathConfig::default().error_handler(|_err, _req| AppError::quiz_not_found().into()),
    )
    .service(health_check)
    .service(health_check_ready)
    .service(register)
    .service(delete_me)
    .service(list_quizzes)
    .service(list_completions)
    .service(create_quiz)
    .service(get_quiz)
    .service(solve_quiz)
    .service(replace_quiz)
    .service(patch_quiz)
    .service(delete_quiz);
}
