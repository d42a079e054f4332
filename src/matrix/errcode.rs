//! Matrix error codes and the standard error envelope

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes a homeserver (or this service) reports in `errcode`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// The endpoint is not implemented by the server
    Unrecognized,
    #[default]
    Unknown,
    Forbidden,
    UnknownToken,
    MissingToken,
    BadJson,
    NotJson,
    NotFound,
    LimitExceeded,
    /// Any code not listed above, kept verbatim
    Other(String),
}

impl ErrorCode {
    /// Wire representation, e.g. `M_UNRECOGNIZED`
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::Unrecognized => "M_UNRECOGNIZED",
            ErrorCode::Unknown => "M_UNKNOWN",
            ErrorCode::Forbidden => "M_FORBIDDEN",
            ErrorCode::UnknownToken => "M_UNKNOWN_TOKEN",
            ErrorCode::MissingToken => "M_MISSING_TOKEN",
            ErrorCode::BadJson => "M_BAD_JSON",
            ErrorCode::NotJson => "M_NOT_JSON",
            ErrorCode::NotFound => "M_NOT_FOUND",
            ErrorCode::LimitExceeded => "M_LIMIT_EXCEEDED",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "M_UNRECOGNIZED" => ErrorCode::Unrecognized,
            "M_UNKNOWN" => ErrorCode::Unknown,
            "M_FORBIDDEN" => ErrorCode::Forbidden,
            "M_UNKNOWN_TOKEN" => ErrorCode::UnknownToken,
            "M_MISSING_TOKEN" => ErrorCode::MissingToken,
            "M_BAD_JSON" => ErrorCode::BadJson,
            "M_NOT_JSON" => ErrorCode::NotJson,
            "M_NOT_FOUND" => ErrorCode::NotFound,
            "M_LIMIT_EXCEEDED" => ErrorCode::LimitExceeded,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard Matrix error body: `{"errcode": "...", "error": "..."}`
///
/// A body without `errcode` reads as `M_UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixErrorInfo {
    #[serde(default)]
    pub errcode: ErrorCode,
    #[serde(default)]
    pub error: String,
}

impl MatrixErrorInfo {
    pub fn new(errcode: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            errcode,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ErrorCode::from("M_UNRECOGNIZED"), ErrorCode::Unrecognized);
        assert_eq!(ErrorCode::from("M_UNKNOWN").as_str(), "M_UNKNOWN");
    }

    #[test]
    fn test_unknown_code_kept_verbatim() {
        let code = ErrorCode::from("ORG_EXAMPLE_CUSTOM");
        assert_eq!(code, ErrorCode::Other("ORG_EXAMPLE_CUSTOM".to_string()));
        assert_eq!(code.to_string(), "ORG_EXAMPLE_CUSTOM");
    }

    #[test]
    fn test_error_envelope() {
        let info: MatrixErrorInfo =
            serde_json::from_str(r#"{"errcode":"M_FORBIDDEN","error":"nope"}"#).unwrap();
        assert_eq!(info.errcode, ErrorCode::Forbidden);
        assert_eq!(info.error, "nope");

        let json = serde_json::to_value(MatrixErrorInfo::new(ErrorCode::MissingToken, "x")).unwrap();
        assert_eq!(json["errcode"], "M_MISSING_TOKEN");
    }

    #[test]
    fn test_envelope_without_message() {
        let info: MatrixErrorInfo = serde_json::from_str(r#"{"errcode":"M_UNRECOGNIZED"}"#).unwrap();
        assert_eq!(info.errcode, ErrorCode::Unrecognized);
        assert!(info.error.is_empty());
    }

    #[test]
    fn test_envelope_without_errcode() {
        let info: MatrixErrorInfo = serde_json::from_str(r#"{"error":"overloaded"}"#).unwrap();
        assert_eq!(info.errcode, ErrorCode::Unknown);
        assert_eq!(info.error, "overloaded");
    }
}
