use actix_web::error::ResponseError;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// Wire shape consumed by API clients for every error response.
///
/// `code` mirrors the HTTP status; `error`/`error_description` are only
/// populated for rejected bearer tokens, matching the OAuth-style body the
/// frontend already parses.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad grant type")]
    BadGrantType,
    #[error("Bad credentials")]
    BadCredentials,
    #[error("Bad authorization scheme")]
    BadScheme,
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid bearer token")]
    InvalidToken,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Human-readable message carried in the response body.
    fn message(&self) -> String {
        match self {
            AppError::BadGrantType => "The grant type must be password".to_string(),
            AppError::BadCredentials => {
                "Either the username or password was invalid.".to_string()
            }
            AppError::BadScheme => "The token type must be bearer.".to_string(),
            AppError::MissingToken | AppError::InvalidToken => "Unauthorized".to_string(),
            AppError::Internal { detail } | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadGrantType | AppError::BadCredentials | AppError::BadScheme => {
                StatusCode::BAD_REQUEST
            }
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn bad_grant_type() -> Self {
        Self::BadGrantType
    }

    pub fn bad_credentials() -> Self {
        Self::BadCredentials
    }

    pub fn bad_scheme() -> Self {
        Self::BadScheme
    }

    pub fn missing_token() -> Self {
        Self::MissingToken
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    /// Whether the response must advertise the expected authentication scheme.
    fn challenges(&self) -> bool {
        matches!(self, AppError::MissingToken | AppError::InvalidToken)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        let (error, error_description) = match self {
            AppError::InvalidToken => (
                Some("invalid_token".to_string()),
                Some("Either the token was expired or invalid.".to_string()),
            ),
            _ => (None, None),
        };

        let body = ApiErrorBody {
            code: status.as_u16(),
            message: self.message(),
            error,
            error_description,
        };

        let mut builder = HttpResponse::build(status);
        if self.challenges() {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(body)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::AppError;

    #[test]
    fn test_client_error_statuses() {
        assert_eq!(AppError::bad_grant_type().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::bad_credentials().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::bad_scheme().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::missing_token().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::invalid_token().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_responses_carry_challenge() {
        use actix_web::error::ResponseError;

        let resp = AppError::missing_token().error_response();
        assert_eq!(
            resp.headers().get("WWW-Authenticate").unwrap(),
            "Bearer"
        );

        let resp = AppError::bad_scheme().error_response();
        assert!(resp.headers().get("WWW-Authenticate").is_none());
    }
}
