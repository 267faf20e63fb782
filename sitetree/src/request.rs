use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, TreeNode};

/// Ordered name/value pairs taken from a form, in document order.
///
/// Repeated names are kept, as a browser would submit them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Encodes the fields as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Form encoding writes spaces as `+` rather than `%20`.
fn encode_component(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.push(name, value);
        }
        fields
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Form(FormFields),
}

impl RequestBody {
    /// The `Content-Type` header the body is sent with, if any.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl HttpRequest {
    /// A `POST` carrying the given form fields.
    pub fn post_form(url: impl Into<String>, fields: FormFields) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: RequestBody::Form(fields),
        }
    }

    /// A `POST` with no body.
    pub fn post_empty(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: RequestBody::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fails with [`Error::Status`] unless the status is 2xx.
    ///
    /// The crawl server reports failures as `{"error": "..."}`; that message is used when
    /// present, the raw body otherwise.
    fn check_status(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }
        #[derive(Deserialize)]
        struct ServerError {
            error: String,
        }
        let message = match serde_json::from_str::<ServerError>(&self.body) {
            Ok(ServerError { error }) => error,
            Err(_) if self.body.trim().is_empty() => "no response body".to_string(),
            Err(_) => self.body.trim().to_string(),
        };
        Err(Error::Status {
            status: self.status,
            message,
        })
    }

    /// Decodes a crawl response into its tree.
    pub fn into_tree(self) -> Result<TreeNode> {
        self.check_status()?;
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes a stop response. Any JSON body is accepted.
    pub fn into_stop_ack(self) -> Result<StopAck> {
        self.check_status()?;
        let value: Value = serde_json::from_str(&self.body)?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        Ok(StopAck { status })
    }
}

/// The server's acknowledgment of a stop request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopAck {
    /// The `status` field of the response, if it had one.
    pub status: Option<String>,
}
