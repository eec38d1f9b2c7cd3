//! `/clientes`: list page and create action.

use axum::{
    extract::State,
    response::{Html, Response},
};

use super::{
    AppState, CLIENTS_PATH, discard_rejected,
    forms::{ClientForm, FormFields, RawForm},
    found, pages,
};
use crate::{core::client, errors::Result};

/// `GET /clientes`
pub async fn list_clients(State(state): State<AppState>) -> Result<Html<String>> {
    let db = state.store.connect().await?;
    let clients = client::list_clients(&db).await?;
    drop(db);

    Ok(pages::clients_page(&clients))
}

/// `POST /clientes`. An empty name or unreadable body is dropped without a
/// trace for the user.
pub async fn create_client(State(state): State<AppState>, form: RawForm) -> Result<Response> {
    let Some(fields) = discard_rejected(FormFields::from_extracted(form), "client")? else {
        return Ok(found(CLIENTS_PATH));
    };
    let form = ClientForm::from(&fields);

    let db = state.store.connect().await?;
    discard_rejected(client::create_client(&db, form.into()).await, "client")?;

    Ok(found(CLIENTS_PATH))
}
