use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient infrastructure errors)
    Retry,
    /// Failed permanently (business rule, bad request, programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, constraint violations and missing records won't resolve
                // with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // The next attempt reads the row the other request wrote
            Self::ConcurrentUpdate(_) => ErrorRetryStrategy::Retry,

            // Webhook delivery - network hiccups are worth another attempt
            Self::NotifyError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::WorkflowError(_) => ErrorRetryStrategy::Fail,
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
