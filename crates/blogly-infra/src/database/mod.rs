//! Database connection management, schema and repositories.

mod connections;
mod migration;
mod repositories;
mod sea_orm_base;

pub mod entity;

pub use connections::{DatabaseConfig, connect_db};
pub use sea_orm::{DbConn, DbErr};
pub use migration::Migrator;
pub use repositories::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};
pub use sea_orm_base::SeaOrmRepository;
