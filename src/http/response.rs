use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;

use crate::error::Error;

/// HTTP response builder
pub struct HttpResponse {
    status: u16,
    body: String,
    content_type: Option<&'static str>,
}

/// Handler return type; both sides carry a response so handlers can bail out
/// early with `?`
pub type Response = Result<HttpResponse, HttpResponse>;

impl HttpResponse {
    /// Create a JSON response from a serde_json::Value
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            content_type: Some("application/json"),
        }
    }

    /// Create an empty 204 No Content response
    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: String::new(),
            content_type: None,
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Wrap this response in Ok() for use as the Response type
    pub fn ok(self) -> Response {
        Ok(self)
    }

    /// Convert to hyper response
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut builder = hyper::Response::builder().status(self.status);
        if let Some(content_type) = self.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        builder.body(Full::new(Bytes::from(self.body))).unwrap()
    }
}

/// Create a JSON response from any serializable value
pub fn json_body<T: Serialize>(body: &T) -> Response {
    match serde_json::to_value(body) {
        Ok(value) => Ok(HttpResponse::json(value)),
        Err(e) => Err(HttpResponse::from(Error::internal(format!(
            "Failed to serialize response: {}",
            e
        )))),
    }
}

/// Status chaining on the Response alias, so `json_body(&x).status(201)` works
pub trait ResponseExt {
    fn status(self, code: u16) -> Self;
}

impl ResponseExt for Response {
    fn status(self, code: u16) -> Self {
        self.map(|r| r.status(code))
    }
}

/// Auto-convert Error to HttpResponse
///
/// This enables using the `?` operator in handlers to propagate domain
/// errors as appropriate HTTP responses.
impl From<Error> for HttpResponse {
    fn from(err: Error) -> HttpResponse {
        let status = err.status_code();
        let body = match &err {
            Error::Validation(errors) => errors.to_json(),
            _ => serde_json::json!({ "error": err.to_string() }),
        };
        HttpResponse::json(body).status(status)
    }
}
