//! Migration CLI tool for the Blogly schema.
//!
//! Reads `DATABASE_URL` and accepts the usual `up`, `down`, `status`,
//! `fresh`, `refresh` and `reset` subcommands. Logging is set up by the
//! migration CLI itself (`-v` for debug output).

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(blogly_infra::Migrator).await;
}
