//! Request business logic - the combined listing, creation and status updates.
//!
//! The listing joins each request with its client and service names using inner
//! joins, so a request whose references do not resolve is left out rather than
//! shown with blanks.

use crate::{
    entities::{Client, Request, RequestStatus, Service, client, request, service},
    errors::{Error, Result},
};
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr};
use serde::Serialize;
use tracing::{info, instrument};

use super::{
    client::{get_client_by_id, list_clients_by_name},
    service::{get_service_by_id, list_services},
};

/// One row of the request table, with display names resolved.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct RequestListing {
    /// Request id
    pub id: i64,
    /// Current status
    pub status: RequestStatus,
    /// Name of the client who asked
    pub client_name: String,
    /// Name of the requested service
    pub service_name: String,
}

/// Everything the request page renders, read in one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RequestPage {
    /// Client selector entries, by name
    pub clients: Vec<client::Model>,
    /// Service selector entries, by id
    pub services: Vec<service::Model>,
    /// Joined request rows, by id
    pub requests: Vec<RequestListing>,
}

/// Retrieves all requests ordered by id, each with its client and service names.
pub async fn list_requests(db: &DatabaseConnection) -> Result<Vec<RequestListing>> {
    Request::find()
        .select_only()
        .column(request::Column::Id)
        .column(request::Column::Status)
        .column_as(client::Column::Name, "client_name")
        .column_as(service::Column::Name, "service_name")
        .inner_join(Client)
        .inner_join(Service)
        .order_by_asc(request::Column::Id)
        .into_model::<RequestListing>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads the three independent result sets behind the request page.
pub async fn request_page(db: &DatabaseConnection) -> Result<RequestPage> {
    Ok(RequestPage {
        clients: list_clients_by_name(db).await?,
        services: list_services(db).await?,
        requests: list_requests(db).await?,
    })
}

/// Finds a request by its id.
pub async fn get_request_by_id(
    db: &DatabaseConnection,
    request_id: i64,
) -> Result<Option<request::Model>> {
    Request::find_by_id(request_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Opens a new request in the [`RequestStatus::Pending`] state.
///
/// # Errors
/// - [`Error::Validation`] if either the client or the service does not exist
/// - [`Error::Database`] if a lookup or the insert fails
#[instrument(skip(db))]
pub async fn create_request(
    db: &DatabaseConnection,
    client_id: i64,
    service_id: i64,
) -> Result<request::Model> {
    if get_client_by_id(db, client_id).await?.is_none() {
        return Err(Error::validation(format!("client {client_id} does not exist")));
    }
    if get_service_by_id(db, service_id).await?.is_none() {
        return Err(Error::validation(format!(
            "service {service_id} does not exist"
        )));
    }

    let request = request::ActiveModel {
        client_id: Set(client_id),
        service_id: Set(service_id),
        status: Set(RequestStatus::Pending),
        ..Default::default()
    };

    let created = request.insert(db).await?;
    info!(
        "Created request #{} (client {}, service {})",
        created.id, created.client_id, created.service_id
    );
    Ok(created)
}

/// Sets the status of one request, whatever its current status is.
///
/// Returns the number of rows changed; 0 when no request has that id.
#[instrument(skip(db))]
pub async fn update_status(
    db: &DatabaseConnection,
    request_id: i64,
    status: RequestStatus,
) -> Result<u64> {
    let result = Request::update_many()
        .col_expr(request::Column::Status, Expr::value(status.as_str()))
        .filter(request::Column::Id.eq(request_id))
        .exec(db)
        .await?;

    info!(
        "Request #{request_id} set to {status} ({} row(s))",
        result.rows_affected
    );
    Ok(result.rows_affected)
}
