//! `/solicitudes`: combined list page, create action and status update.

use axum::{
    extract::State,
    response::{Html, Response},
};
use tracing::debug;

use super::{
    AppState, REQUESTS_PATH, discard_rejected,
    forms::{FormFields, RawForm, RequestForm, StatusForm},
    found, pages,
};
use crate::{core::request, errors::Result};

/// `GET /solicitudes`
pub async fn list_requests(State(state): State<AppState>) -> Result<Html<String>> {
    let db = state.store.connect().await?;
    let page = request::request_page(&db).await?;
    drop(db);

    Ok(pages::requests_page(&page))
}

/// `POST /solicitudes`. Missing, malformed or unknown ids are silently ignored.
pub async fn create_request(State(state): State<AppState>, form: RawForm) -> Result<Response> {
    let ids = FormFields::from_extracted(form).and_then(|fields| RequestForm::from(&fields).ids());
    let Some((client_id, service_id)) = discard_rejected(ids, "request")? else {
        return Ok(found(REQUESTS_PATH));
    };

    let db = state.store.connect().await?;
    discard_rejected(
        request::create_request(&db, client_id, service_id).await,
        "request",
    )?;

    Ok(found(REQUESTS_PATH))
}

/// `POST /solicitudes/actualizar-estado`. Always redirects, changed or not.
pub async fn update_status(State(state): State<AppState>, form: RawForm) -> Result<Response> {
    let target =
        FormFields::from_extracted(form).and_then(|fields| StatusForm::from(&fields).target());
    let Some((request_id, status)) = discard_rejected(target, "status")? else {
        return Ok(found(REQUESTS_PATH));
    };

    let db = state.store.connect().await?;
    let changed = request::update_status(&db, request_id, status).await?;
    if changed == 0 {
        debug!("No request #{request_id} to update");
    }

    Ok(found(REQUESTS_PATH))
}
