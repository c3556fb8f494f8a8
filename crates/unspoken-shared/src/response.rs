//! Response envelope the hosted platform wraps payloads in.

use serde::{Deserialize, Serialize};

/// Successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Unwrap the payload of a success envelope, if any.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Problem-style error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// One line suitable for surfacing to the user verbatim.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.title, detail),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_includes_detail() {
        let err = ErrorResponse {
            status: 401,
            title: "Unauthorized".into(),
            detail: Some("wrong password".into()),
        };
        assert_eq!(err.message(), "Unauthorized: wrong password");
    }

    #[test]
    fn test_into_data_only_on_success() {
        let ok: ApiResponse<u32> = ApiResponse::ok(7);
        assert_eq!(ok.into_data(), Some(7));

        let failed: ApiResponse<u32> = ApiResponse {
            success: false,
            data: Some(7),
            message: None,
        };
        assert_eq!(failed.into_data(), None);
    }
}
