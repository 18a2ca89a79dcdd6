use entity::user::UserRole;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection & notifier
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(AuthError::UserNotInSession)`: User ID not present in session
/// - `Err(AuthError::UserNotInDatabase)`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Fails with `Forbidden` unless the user holds one of `roles`
pub fn require_role(user: &UserDto, roles: &[UserRole]) -> Result<(), Error> {
    if roles.contains(&user.role) {
        return Ok(());
    }

    Err(AuthError::Forbidden(format!(
        "User ID {} is not permitted to perform this action",
        user.id
    ))
    .into())
}
