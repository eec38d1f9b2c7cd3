//! Service catalog queries. The catalog is read-only after bootstrap.

use crate::{
    entities::{Service, service},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};

/// Retrieves every service ordered by id, which is also seeding order.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>> {
    Service::find()
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a service by its id.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    service_id: i64,
) -> Result<Option<service::Model>> {
    Service::find_by_id(service_id)
        .one(db)
        .await
        .map_err(Into::into)
}
