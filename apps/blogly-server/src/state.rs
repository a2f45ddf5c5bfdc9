//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, UserRepository};
use blogly_infra::database::{DbConn, DbErr};
use blogly_infra::{DatabaseConfig, SeaOrmPostRepository, SeaOrmUserRepository, connect_db};

/// Shared application state.
///
/// Handlers reach the store only through these repositories.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the database, ensure the schema, and build the repositories.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = connect_db(db_config).await?;

        tracing::info!("Application state initialized");

        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DbConn) -> Self {
        Self {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            posts: Arc::new(SeaOrmPostRepository::new(db)),
        }
    }
}
