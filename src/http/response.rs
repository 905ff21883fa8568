//! Response body shared by the fault handlers.
//!
//! `message` and `error` are optional and left out of the JSON when unset,
//! so a failure body reads `{service, error, timestamp}` and a success body
//! reads `{service, message, timestamp}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse {
    pub service: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl ServiceResponse {
    /// Empty body stamped with the current time.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            message: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Pair the body with a status code.
    pub fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(ServiceResponse::new("svc").with_message("ok")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["service"], "svc");
        assert_eq!(obj["message"], "ok");
        assert!(!obj.contains_key("error"));
        assert!(obj["timestamp"].is_string());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let json = serde_json::to_value(ServiceResponse::new("svc")).unwrap();
        let raw = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok(), "{raw}");
    }

    #[test]
    fn respond_sets_status_and_json_content_type() {
        let response = ServiceResponse::new("svc")
            .with_error("boom")
            .respond(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
