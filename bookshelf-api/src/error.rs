use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug, Error)]
pub enum BookshelfApiError {
    /// The backend answered with a 4xx or 5xx status
    #[error("({0}) {1}")]
    Api(StatusCode, ErrorDetail),

    #[error("Internal error: {0}")]
    Internal(ApiError),
}

impl BookshelfApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(status, _) => Some(*status),
            Self::Internal(_) => None,
        }
    }
}

impl From<ApiError> for BookshelfApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, body) | ApiError::ServerError(status, body) => {
                BookshelfApiError::Api(status, ErrorDetail::from_body(&body))
            }
            e => BookshelfApiError::Internal(e),
        }
    }
}

/// The `detail` field of an error response.
///
/// Handlers raise a plain message; request validation failures carry a list of
/// issues instead. Bodies that are not JSON are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
    Body(String),
}

impl ErrorDetail {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse {
                detail: DetailBody::Message(message),
            }) => Self::Message(message),
            Ok(ErrorResponse {
                detail: DetailBody::Validation(issues),
            }) => Self::Validation(issues),
            Err(_) => Self::Body(body.to_string()),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Validation(issues) => {
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", issue)?;
                }
                Ok(())
            }
            Self::Body(body) if body.is_empty() => f.write_str("empty response body"),
            Self::Body(body) => f.write_str(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self
            .loc
            .iter()
            .map(|part| match part {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        if location.is_empty() {
            f.write_str(&self.msg)
        } else {
            write!(f, "{}: {}", location, self.msg)
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: DetailBody,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailBody {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_detail_is_extracted() {
        let detail = ErrorDetail::from_body(r#"{"detail":"Book not found"}"#);

        assert_eq!(detail, ErrorDetail::Message("Book not found".to_string()));
        assert_eq!(detail.to_string(), "Book not found");
    }

    #[test]
    fn validation_detail_lists_every_issue() {
        let body = r#"{"detail":[
            {"loc":["body","direction"],"msg":"Input should be less than or equal to 1","type":"less_than_equal"},
            {"loc":["body","book_id"],"msg":"Field required","type":"missing"}
        ]}"#;

        let detail = ErrorDetail::from_body(body);
        assert!(matches!(&detail, ErrorDetail::Validation(issues) if issues.len() == 2));
        assert_eq!(
            detail.to_string(),
            "body.direction: Input should be less than or equal to 1; body.book_id: Field required"
        );
    }

    #[test]
    fn non_json_body_is_kept() {
        let detail = ErrorDetail::from_body("Internal Server Error");

        assert_eq!(detail, ErrorDetail::Body("Internal Server Error".to_string()));
    }
}
