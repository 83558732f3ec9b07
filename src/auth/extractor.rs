use std::sync::Arc;

use actix_web::{dev::Payload, http::header::Header, web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Basic};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::User,
};

/// The principal behind an HTTP Basic `Authorization` header, resolved
/// against the user directory. Extraction fails with `Unauthorized` when the
/// header is missing, malformed, or does not match a stored account.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let credentials = Authorization::<Basic>::parse(req).ok().map(|header| {
            let basic = header.into_scheme();
            (
                basic.user_id().to_string(),
                basic
                    .password()
                    .map(|password| password.to_string())
                    .unwrap_or_default(),
            )
        });
        let state = req.app_data::<web::Data<Arc<AppState>>>().cloned();

        Box::pin(async move {
            let (username, password) = credentials.ok_or_else(AppError::unauthenticated)?;
            let state = state.ok_or_else(|| {
                AppError::InternalError("Application state not configured".to_string())
            })?;

            let user = state.user_service.authenticate(&username, &password).await?;
            Ok(AuthenticatedUser(user))
        })
    }
}
