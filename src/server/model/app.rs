use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: Arc<dyn Notifier>,
}
