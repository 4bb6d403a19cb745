use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope shared by every JSON endpoint: `{status, message, data?, error?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, "Succeed to GET data", data)
    }

    pub fn created(data: T) -> Self {
        Self::success(StatusCode::CREATED, "Succeed to POST data", data)
    }

    pub fn updated(data: T) -> Self {
        Self::success(StatusCode::OK, "Succeed to UPDATE data", data)
    }
}

impl ApiResponse<()> {
    pub fn deleted() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: "Succeed to DELETE data".to_string(),
            data: None,
            error: None,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>, error: String) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let body = serde_json::to_value(ApiResponse::created(vec![1, 2])).unwrap();

        assert_eq!(body["status"], 201);
        assert_eq!(body["message"], "Succeed to POST data");
        assert_eq!(body["data"], serde_json::json!([1, 2]));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::error(
            StatusCode::NOT_FOUND,
            "Not found",
            "category not found".to_string(),
        ))
        .unwrap();

        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "category not found");
        assert!(body.get("data").is_none());
    }
}
