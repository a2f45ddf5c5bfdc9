//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`:
//! SeaORM entities, schema migrations and repositories.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` - SQLite driver, used for in-memory test databases

pub mod database;

pub use database::{
    DatabaseConfig, Migrator, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository,
    connect_db,
};
