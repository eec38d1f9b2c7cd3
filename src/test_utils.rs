//! Shared test utilities for the service desk.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        bootstrap::bootstrap,
        client::{self, NewClient},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables created and the
/// service catalog seeded. This is the standard setup for unit tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    bootstrap(&db).await?;
    Ok(db)
}

/// Creates a test client with only a name.
///
/// # Defaults
/// * `phone`: None
/// * `email`: None
pub async fn create_test_client(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::client::Model> {
    client::create_client(
        db,
        NewClient {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test client with every contact field filled in.
pub async fn create_custom_client(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
    email: &str,
) -> Result<entities::client::Model> {
    client::create_client(
        db,
        NewClient {
            name: name.to_string(),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
        },
    )
    .await
}

/// Sets up a seeded database holding one client named "Ana".
/// Returns (db, client) for request-related tests.
pub async fn setup_with_client() -> Result<(DatabaseConnection, entities::client::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Ana").await?;
    Ok((db, client))
}
