//! HTTP interface - routes, shared state and response plumbing.
//!
//! Every handler opens its own connection through [`Store::connect`] and drops it
//! before the response goes out. Mutating routes always answer with a `302 Found`
//! back to the list page; rejected submissions are indistinguishable from accepted
//! ones on the wire.

/// `/clientes` handlers
pub mod clients;
/// Form payloads and their field checks
pub mod forms;
/// Server-rendered HTML
pub mod pages;
/// `/solicitudes` handlers
pub mod requests;

use crate::{config::database::Store, errors::Error};
use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Client list page
pub const CLIENTS_PATH: &str = "/clientes";
/// Request list page
pub const REQUESTS_PATH: &str = "/solicitudes";
/// Status update action
pub const STATUS_PATH: &str = "/solicitudes/actualizar-estado";

/// State shared by all handlers. Cloned per request; holds no connection.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Where handlers open their connections
    pub store: Store,
}

impl AppState {
    /// Wraps a store for use as router state.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route(
            CLIENTS_PATH,
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            REQUESTS_PATH,
            get(requests::list_requests).post(requests::create_request),
        )
        .route(STATUS_PATH, post(requests::update_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_redirect() -> Response {
    found(CLIENTS_PATH)
}

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Turns [`Error::Validation`] into `Ok(None)` so the caller can redirect as if
/// the submission succeeded. Any other error is passed through.
pub(crate) fn discard_rejected<T>(
    result: Result<T, Error>,
    what: &str,
) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Validation { message }) => {
            debug!("Discarded {what} submission: {message}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error!("Request failed: {self}");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_sets_location() {
        let response = found(REQUESTS_PATH);
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], REQUESTS_PATH);
    }

    #[test]
    fn test_discard_rejected_only_swallows_validation() {
        assert!(matches!(discard_rejected(Ok(5), "test"), Ok(Some(5))));
        assert!(matches!(
            discard_rejected::<()>(Err(Error::validation("nope")), "test"),
            Ok(None)
        ));

        let passed_through = discard_rejected::<()>(
            Err(Error::Config {
                message: "broken".to_string(),
            }),
            "test",
        );
        assert!(matches!(passed_through, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_database_error_is_500() {
        let response = Error::Database(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
