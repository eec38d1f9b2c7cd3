//! Server-rendered pages for the client and request views.
//!
//! Plain `format!` templates; every value that came from a user goes through
//! [`escape`] first.

use axum::response::Html;

use super::{CLIENTS_PATH, REQUESTS_PATH, STATUS_PATH};
use crate::{
    core::request::{RequestListing, RequestPage},
    entities::{RequestStatus, client},
};

/// Escapes text for use inside HTML element content and quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="{CLIENTS_PATH}">Clientes</a> | <a href="{REQUESTS_PATH}">Solicitudes</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    ))
}

/// Client list with the create form above it.
#[must_use]
pub fn clients_page(clients: &[client::Model]) -> Html<String> {
    let rows: String = clients
        .iter()
        .map(|client| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                client.id,
                escape(&client.name),
                escape(client.phone.as_deref().unwrap_or_default()),
                escape(client.email.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    let body = format!(
        r#"<form method="post" action="{CLIENTS_PATH}">
<label>Nombre <input name="nombre" required></label>
<label>Teléfono <input name="telefono"></label>
<label>Correo <input name="correo" type="email"></label>
<button type="submit">Guardar</button>
</form>
<table>
<thead><tr><th>ID</th><th>Nombre</th><th>Teléfono</th><th>Correo</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );

    layout("Clientes", &body)
}

fn status_options(current: RequestStatus) -> String {
    RequestStatus::ALL
        .iter()
        .map(|status| {
            let selected = if *status == current { " selected" } else { "" };
            format!(r#"<option value="{status}"{selected}>{status}</option>"#)
        })
        .collect()
}

fn request_row(request: &RequestListing) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{client}</td><td>{service}</td><td>{status}</td><td>
<form method="post" action="{STATUS_PATH}">
<input type="hidden" name="solicitud_id" value="{id}">
<select name="estado">{options}</select>
<button type="submit">Actualizar</button>
</form>
</td></tr>
"#,
        id = request.id,
        client = escape(&request.client_name),
        service = escape(&request.service_name),
        status = request.status,
        options = status_options(request.status),
    )
}

/// Request list, create form and the client/service selectors.
#[must_use]
pub fn requests_page(page: &RequestPage) -> Html<String> {
    let client_options: String = page
        .clients
        .iter()
        .map(|client| {
            format!(
                r#"<option value="{}">{}</option>"#,
                client.id,
                escape(&client.name)
            )
        })
        .collect();
    let service_options: String = page
        .services
        .iter()
        .map(|service| {
            format!(
                r#"<option value="{}">{}</option>"#,
                service.id,
                escape(&service.name)
            )
        })
        .collect();
    let rows: String = page.requests.iter().map(request_row).collect();

    let body = format!(
        r#"<form method="post" action="{REQUESTS_PATH}">
<label>Cliente <select name="cliente_id" required>{client_options}</select></label>
<label>Servicio <select name="servicio_id" required>{service_options}</select></label>
<button type="submit">Crear solicitud</button>
</form>
<table>
<thead><tr><th>ID</th><th>Cliente</th><th>Servicio</th><th>Estado</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );

    layout("Solicitudes", &body)
}
