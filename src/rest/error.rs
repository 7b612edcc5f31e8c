use crate::Error;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn database() -> Self {
        Self::new(
            RestApiErrorCode::Database,
            "Database query failed. Contact s-locator team to resolve.",
        )
    }
}

#[derive(Debug, PartialEq)]
pub enum RestApiErrorCode {
    NotFound,
    InvalidInput,
    InsufficientData,
    Computation,
    Database,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestApiErrorCode::NotFound => write!(f, "not_found"),
            RestApiErrorCode::InvalidInput => write!(f, "invalid_input"),
            RestApiErrorCode::InsufficientData => write!(f, "insufficient_data"),
            RestApiErrorCode::Computation => write!(f, "computation"),
            RestApiErrorCode::Database => write!(f, "database"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Computation => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for RestApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound(msg) => Self::new(RestApiErrorCode::NotFound, msg),
            Error::InvalidInput(msg) => Self::new(RestApiErrorCode::InvalidInput, msg),
            Error::InsufficientData(msg) => Self::new(RestApiErrorCode::InsufficientData, msg),
            Error::Computation(msg) => Self::new(RestApiErrorCode::Computation, msg),
            other => {
                error!(error = %other, "Request failed");
                Self::database()
            }
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "code": self.code.to_string(),
            "message": self.message,
        });
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

#[cfg(test)]
mod test {
    use super::{RestApiError, RestApiErrorCode};
    use crate::Error;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn from_error() {
        let cases = [
            (Error::NotFound("".into()), StatusCode::NOT_FOUND),
            (Error::InvalidInput("".into()), StatusCode::BAD_REQUEST),
            (
                Error::InsufficientData("".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                Error::Computation("".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (Error::Generic("".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(status, RestApiError::from(error).status_code());
        }
    }

    #[test]
    fn keeps_message() {
        let error = RestApiError::from(Error::NotFound("Layer 1 doesn't exist".into()));
        assert_eq!(RestApiErrorCode::NotFound, error.code);
        assert_eq!("not_found: Layer 1 doesn't exist", error.to_string());
    }
}
