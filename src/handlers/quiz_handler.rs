use std::sync::Arc;

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use json_patch::PatchOperation;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{AnswerRequest, PaginationParams, QuizRequest},
};

#[get("/api/quizzes")]
pub async fn list_quizzes(
    _auth: AuthenticatedUser, // Require authentication
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.listing_service.list_quizzes(&query).await?;
    Ok(HttpResponse::Ok().json(response))
}

// Registered ahead of `/api/quizzes/{id}`.
#[get("/api/quizzes/completed")]
pub async fn list_completions(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .listing_service
        .list_completions(&auth.0, &query)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(*id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[post("/api/quizzes/{id}/solve")]
pub async fn solve_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
    request: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .answer_service
        .check_answer(*id, &request.answer, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[put("/api/quizzes/{id}")]
pub async fn replace_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .replace_quiz(*id, request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// Accepts both `application/json` and `application/json-patch+json` bodies.
#[patch("/api/quizzes/{id}")]
pub async fn patch_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
    operations: web::Json<Vec<PatchOperation>>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .patch_quiz(*id, &operations, &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(*id, &auth.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
