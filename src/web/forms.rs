//! Form payloads posted by the two pages.
//!
//! Bodies are extracted as raw `key=value` pairs so that neither a missing field,
//! a repeated field nor an unreadable body turns into a 4xx. The first value of a
//! repeated key wins. Presence and format are checked here and reported as
//! [`Error::Validation`].

use crate::{
    core::client::NewClient,
    entities::RequestStatus,
    errors::{Error, Result},
};
use axum::{Form, extract::rejection::FormRejection};

/// What the handlers extract: the body pairs, or why they could not be read.
pub type RawForm = std::result::Result<Form<Vec<(String, String)>>, FormRejection>;

/// Submitted fields in body order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Unwraps an extracted body. A rejected body (wrong or missing content type,
    /// undecodable payload) is a validation failure like any other bad input.
    pub fn from_extracted(form: RawForm) -> Result<Self> {
        form.map(|Form(pairs)| Self(pairs))
            .map_err(|rejection| Error::validation(format!("unreadable form body: {rejection}")))
    }

    /// First value submitted under `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    fn first_owned(&self, key: &str) -> Option<String> {
        self.first(key).map(str::to_string)
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// `POST /clientes`
#[derive(Debug, Default)]
pub struct ClientForm {
    /// Client name
    pub nombre: Option<String>,
    /// Phone
    pub telefono: Option<String>,
    /// Email
    pub correo: Option<String>,
}

impl From<&FormFields> for ClientForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            nombre: fields.first_owned("nombre"),
            telefono: fields.first_owned("telefono"),
            correo: fields.first_owned("correo"),
        }
    }
}

impl From<ClientForm> for NewClient {
    fn from(form: ClientForm) -> Self {
        Self {
            name: form.nombre.unwrap_or_default(),
            phone: form.telefono,
            email: form.correo,
        }
    }
}

/// `POST /solicitudes`
#[derive(Debug, Default)]
pub struct RequestForm {
    /// Selected client id
    pub cliente_id: Option<String>,
    /// Selected service id
    pub servicio_id: Option<String>,
}

impl From<&FormFields> for RequestForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            cliente_id: fields.first_owned("cliente_id"),
            servicio_id: fields.first_owned("servicio_id"),
        }
    }
}

impl RequestForm {
    /// Parses `(client_id, service_id)`.
    pub fn ids(&self) -> Result<(i64, i64)> {
        Ok((
            parse_id("cliente_id", self.cliente_id.as_deref())?,
            parse_id("servicio_id", self.servicio_id.as_deref())?,
        ))
    }
}

/// `POST /solicitudes/actualizar-estado`
#[derive(Debug, Default)]
pub struct StatusForm {
    /// Request to update
    pub solicitud_id: Option<String>,
    /// New status literal
    pub estado: Option<String>,
}

impl From<&FormFields> for StatusForm {
    fn from(fields: &FormFields) -> Self {
        Self {
            solicitud_id: fields.first_owned("solicitud_id"),
            estado: fields.first_owned("estado"),
        }
    }
}

impl StatusForm {
    /// Parses `(request_id, status)`. The status must match one literal exactly.
    pub fn target(&self) -> Result<(i64, RequestStatus)> {
        let request_id = parse_id("solicitud_id", self.solicitud_id.as_deref())?;
        let status = self
            .estado
            .as_deref()
            .filter(|estado| !estado.is_empty())
            .ok_or_else(|| Error::validation("estado is missing"))?
            .parse()?;
        Ok((request_id, status))
    }
}

/// Parses a positive integer identifier from a form field.
pub fn parse_id(field: &str, value: Option<&str>) -> Result<i64> {
    let raw = value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| Error::validation(format!("{field} is missing")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::validation(format!("{field} is not a valid id: {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn status_form(id: Option<&str>, estado: Option<&str>) -> StatusForm {
        StatusForm {
            solicitud_id: id.map(str::to_string),
            estado: estado.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("x", Some("7")).unwrap(), 7);
        assert_eq!(parse_id("x", Some(" 12 ")).unwrap(), 12);

        for bad in [None, Some(""), Some("  "), Some("abc"), Some("1.5"), Some("0"), Some("-3")] {
            assert!(
                matches!(parse_id("x", bad), Err(Error::Validation { message: _ })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_form_needs_both_ids() {
        let form = RequestForm {
            cliente_id: Some("1".to_string()),
            servicio_id: Some("3".to_string()),
        };
        assert_eq!(form.ids().unwrap(), (1, 3));

        let missing_service = RequestForm {
            cliente_id: Some("1".to_string()),
            servicio_id: None,
        };
        assert!(missing_service.ids().is_err());

        assert!(RequestForm::default().ids().is_err());
    }

    #[test]
    fn test_status_form_whitelist() {
        assert_eq!(
            status_form(Some("4"), Some("In Process")).target().unwrap(),
            (4, RequestStatus::InProcess)
        );

        assert!(status_form(Some("4"), Some("Cancelled")).target().is_err());
        assert!(status_form(Some("4"), Some("")).target().is_err());
        assert!(status_form(Some("4"), None).target().is_err());
        assert!(status_form(None, Some("Done")).target().is_err());
        assert!(status_form(Some("four"), Some("Done")).target().is_err());
    }

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_first_value_of_repeated_key_wins() {
        let submitted = fields(&[("solicitud_id", "1"), ("solicitud_id", "2"), ("estado", "Done")]);
        assert_eq!(submitted.first("solicitud_id"), Some("1"));
        assert_eq!(submitted.first("missing"), None);

        let target = StatusForm::from(&submitted).target().unwrap();
        assert_eq!(target, (1, RequestStatus::Done));

        let form = RequestForm::from(&fields(&[
            ("cliente_id", "3"),
            ("servicio_id", "1"),
            ("servicio_id", "2"),
        ]));
        assert_eq!(form.ids().unwrap(), (3, 1));

        let client = ClientForm::from(&fields(&[("nombre", "Ana"), ("nombre", "Bob")]));
        assert_eq!(client.nombre.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn test_rejected_body_is_a_validation_error() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        // POST without a Content-Type header
        let request = Request::builder()
            .method("POST")
            .uri("/clientes")
            .body(Body::from("nombre=Ana"))
            .unwrap();
        let rejected: RawForm = Form::from_request(request, &()).await;
        assert!(rejected.is_err());
        assert!(matches!(
            FormFields::from_extracted(rejected),
            Err(Error::Validation { message: _ })
        ));

        let accepted: RawForm = Ok(Form(vec![("nombre".to_string(), "Ana".to_string())]));
        let fields = FormFields::from_extracted(accepted).unwrap();
        assert_eq!(fields.first("nombre"), Some("Ana"));
    }

    #[test]
    fn test_client_form_into_new_client() {
        let form = ClientForm {
            nombre: Some(" Ana ".to_string()),
            telefono: Some("555-1111".to_string()),
            correo: None,
        };
        let new_client = NewClient::from(form);
        // Trimming happens in core, not here
        assert_eq!(new_client.name, " Ana ");
        assert_eq!(new_client.phone.as_deref(), Some("555-1111"));
        assert!(new_client.email.is_none());

        assert_eq!(NewClient::from(ClientForm::default()).name, "");
    }
}
