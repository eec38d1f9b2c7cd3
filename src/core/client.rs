//! Client business logic - listing and creating clients.
//!
//! Clients are never updated or deleted. Creation trims every field and rejects an
//! empty name with [`Error::Validation`], which the web layer turns into a silent
//! redirect.

use crate::{
    entities::{Client, client},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Fields accepted by [`create_client`], exactly as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewClient {
    /// Required; must be non-empty after trimming
    pub name: String,
    /// Optional phone, stored trimmed
    pub phone: Option<String>,
    /// Optional email, stored trimmed
    pub email: Option<String>,
}

/// Retrieves all clients in creation order (id ascending).
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all clients ordered alphabetically, as shown in the request form selector.
pub async fn list_clients_by_name(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Name)
        .order_by_asc(client::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by its id.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new client after trimming its fields.
///
/// # Errors
/// - [`Error::Validation`] if the name is empty or whitespace-only (nothing is written)
/// - [`Error::Database`] if the insert fails
#[instrument(skip(db))]
pub async fn create_client(db: &DatabaseConnection, new_client: NewClient) -> Result<client::Model> {
    let name = new_client.name.trim();
    if name.is_empty() {
        return Err(Error::validation("Client name cannot be empty"));
    }

    let client = client::ActiveModel {
        name: Set(name.to_string()),
        phone: Set(new_client.phone.map(|phone| phone.trim().to_string())),
        email: Set(new_client.email.map(|email| email.trim().to_string())),
        ..Default::default()
    };

    let created = client.insert(db).await?;
    info!("Created client #{} ({})", created.id, created.name);
    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_client_validation() -> Result<()> {
        // Nothing may reach the database, so a mock with no results is enough
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for name in ["", "   ", "\t\n"] {
            let result = create_client(
                &db,
                NewClient {
                    name: name.to_string(),
                    ..Default::default()
                },
            )
            .await;
            assert!(matches!(result, Err(Error::Validation { message: _ })));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_custom_client(&db, "Ana", "555-1111", "ana@x.com").await?;

        let clients = list_clients(&db).await?;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0], client);
        assert_eq!(client.name, "Ana");
        assert_eq!(client.phone.as_deref(), Some("555-1111"));
        assert_eq!(client.email.as_deref(), Some("ana@x.com"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_trims_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_client(
            &db,
            NewClient {
                name: "  Luis  ".to_string(),
                phone: Some(" 555-2222 ".to_string()),
                email: Some("".to_string()),
            },
        )
        .await?;

        assert_eq!(client.name, "Luis");
        assert_eq!(client.phone.as_deref(), Some("555-2222"));
        // Empty optional fields are kept as submitted
        assert_eq!(client.email.as_deref(), Some(""));

        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_client_adds_no_row() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_client(&db, "Ana").await?;

        let result = create_test_client(&db, "   ").await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));

        assert_eq!(list_clients(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_client_ids_strictly_increase() -> Result<()> {
        let db = setup_test_db().await?;

        let mut last_id = 0;
        for name in ["Carla", "Beto", "Ana"] {
            let client = create_test_client(&db, name).await?;
            assert!(client.id > last_id);
            last_id = client.id;
        }

        let by_id: Vec<String> = list_clients(&db).await?.into_iter().map(|c| c.name).collect();
        assert_eq!(by_id, ["Carla", "Beto", "Ana"]);

        let by_name: Vec<String> = list_clients_by_name(&db)
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(by_name, ["Ana", "Beto", "Carla"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_client_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_client(&db, "Ana").await?;

        let found = get_client_by_id(&db, created.id).await?;
        assert_eq!(found.unwrap(), created);

        assert!(get_client_by_id(&db, created.id + 1).await?.is_none());
        Ok(())
    }
}
