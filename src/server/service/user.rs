//! User account service.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{data::user::UserRepository, error::Error, service::retry::RetryContext},
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(&format!("get user ID {}", user_id), move || async move {
            let user_repo = UserRepository::new(db);

            Ok(user_repo.get(user_id).await?.map(UserDto::from))
        })
        .await
    }

    /// Registers a new department member.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Blank name or email, or email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let user = CreateUserDto {
            email: user.email.trim().to_lowercase(),
            name: user.name.trim().to_string(),
            role: user.role,
        };

        if user.email.is_empty() || !user.email.contains('@') {
            return Err(Error::ValidationError(
                "A valid email address is required".to_string(),
            ));
        }
        if user.name.is_empty() {
            return Err(Error::ValidationError("Name must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        match user_repo.create(&user).await {
            Ok(model) => {
                tracing::debug!("Created {:?} user ID {}", model.role, model.id);

                Ok(model.into())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(Error::ValidationError(format!(
                    "A user with email {} already exists",
                    user.email
                ))),
                _ => Err(err.into()),
            },
        }
    }
}
