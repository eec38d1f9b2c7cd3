//! Database configuration module for the service desk.
//!
//! This module handles the `SQLite` store: where it lives, how a handler opens its own
//! connection to it, and how the three tables are created from the entity definitions.
//! Table creation goes through `SeaORM`'s `Schema::create_table_from_entity`, so the
//! schema always matches the Rust models without hand-written SQL.

use crate::entities::{Client, Request, Service};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Single-file store next to the working directory, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://empresa.db?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, if set.
#[must_use]
pub fn database_url_from_env() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Handle on the backing store.
///
/// Holds only the URL; every call to [`Store::connect`] opens a fresh
/// single-connection handle that is released when the caller drops it.
/// Nothing is pooled or shared between HTTP requests.
#[derive(Clone, Debug)]
pub struct Store {
    url: Arc<str>,
}

impl Store {
    /// Creates a store pointing at `url` without touching it.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Arc::from(url.into()),
        }
    }

    /// The URL this store connects to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Opens a connection scoped to the caller.
    pub async fn connect(&self) -> Result<DatabaseConnection> {
        debug!("Opening connection to {}", self.url);
        let mut options = ConnectOptions::new(self.url.to_string());
        options
            .max_connections(1)
            .min_connections(0)
            .sqlx_logging(false);
        Database::connect(options).await.map_err(Into::into)
    }
}

/// Creates the clients, services and requests tables if they are missing.
///
/// Existing tables are left untouched; there is no migration step.
#[instrument(skip(db))]
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut client_table = schema.create_table_from_entity(Client);
    let mut service_table = schema.create_table_from_entity(Service);
    let mut request_table = schema.create_table_from_entity(Request);

    client_table.if_not_exists();
    service_table.if_not_exists();
    request_table.if_not_exists();

    db.execute(builder.build(&client_table)).await?;
    db.execute(builder.build(&service_table)).await?;
    db.execute(builder.build(&request_table)).await?;

    debug!("Tables ensured");
    Ok(())
}
