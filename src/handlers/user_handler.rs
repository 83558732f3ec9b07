use std::sync::Arc;

use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::RegisterUserRequest,
};

#[post("/api/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/api/users/me")]
pub async fn delete_me(
    auth: AuthenticatedUser,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_account(&auth.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let db_health = match &state.db {
        Some(db) => db.health_check().await.is_ok(),
        None => true,
    };

    let response = serde_json::json!({
        "status": if db_health { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health { "ok" } else { "error" }
        }
    });

    if db_health {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
