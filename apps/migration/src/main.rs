//! Migration CLI for the `posts` document table.
//!
//! Reads `DATABASE_URL` (from `.env` when present), e.g. `migration up`.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info,sea_orm_migration=info")
        .init();

    tracing::info!("Running post schema migrations");
    cli::run_cli(migration::Migrator).await;
}
