use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password::{hash_password, verify_password},
    errors::{invalid_fields, AppError, AppResult, EMAIL_TAKEN},
    models::{
        domain::User,
        dto::{request::RegisterUserRequest, response::RegisteredUserDto},
    },
    repositories::{QuizRepository, UserRepository},
};

pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    quiz_repository: Arc<dyn QuizRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        quiz_repository: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            user_repository,
            quiz_repository,
        }
    }

    /// Creates an account keyed by email. The password is stored as an Argon2 hash.
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<RegisteredUserDto> {
        if let Err(errors) = request.validate() {
            return Err(AppError::ValidationError(format!(
                "Register data is incorrect. Check the following field(s): {}",
                invalid_fields(&errors).join(", ")
            )));
        }

        if self
            .user_repository
            .find_by_username(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .user_repository
            .create(User::new(&request.email, &password_hash))
            .await?;

        log::info!("Registered user {} ({})", user.id, user.username);
        Ok(RegisteredUserDto {
            id: user.id,
            email: user.username,
        })
    }

    /// Resolves Basic credentials to a stored user. Unknown users and wrong
    /// passwords fail the same way.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(AppError::unauthenticated)?;

        if !verify_password(password, &user.password_hash)? {
            log::warn!("Rejected credentials for {}", username);
            return Err(AppError::unauthenticated());
        }

        Ok(user)
    }

    /// Removes the caller's account together with every quiz they own.
    /// Completion records are kept.
    pub async fn delete_account(&self, caller: &User) -> AppResult<()> {
        let removed = self.quiz_repository.delete_by_owner(caller.id).await?;
        self.user_repository.delete(caller.id).await?;

        log::info!("Deleted user {} and {} owned quiz(zes)", caller.id, removed);
        Ok(())
    }
}
