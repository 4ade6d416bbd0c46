use std::collections::BTreeMap;

use actix_web::{error::{InternalError, JsonPayloadError}, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

pub const INTERNAL_ERROR_MESSAGE: &str = "Failed due to internal server error";

// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody{
    pub error: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub reasons: BTreeMap<String, String>
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reasons: BTreeMap::new()
        }
    }

    pub fn with_reason(mut self, field: &str, message: impl Into<String>) -> Self {
        self.reasons.insert(field.to_string(), message.into());
        self
    }

    pub fn with_reasons(mut self, reasons: BTreeMap<String, String>) -> Self {
        self.reasons.extend(reasons);
        self
    }
}

// Rewrites json extraction failures into the error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected json payload: {}", err);

    let response = match &err {
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType()
            .json(ErrorBody::new("Content type must be application/json")),
        _ => HttpResponse::BadRequest()
            .json(ErrorBody::new("Invalid request body").with_reason("body", err.to_string()))
    };

    InternalError::from_response(err, response).into()
}
