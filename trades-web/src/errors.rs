use actix_web::error::{BlockingError, ResponseError};
use actix_web::HttpResponse;
use derive_more::Display;
use serde_derive::*;

#[derive(Debug, Display, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    errors: Vec<String>,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(err) => {
                HttpResponse::BadRequest().json::<ErrorResponse>(err.into())
            }
            ApiError::InternalServerError(err) => {
                HttpResponse::InternalServerError().json::<ErrorResponse>(err.into())
            }
        }
    }
}

impl From<&String> for ErrorResponse {
    fn from(err: &String) -> Self {
        ErrorResponse {
            errors: vec![err.into()],
        }
    }
}

impl From<Vec<String>> for ErrorResponse {
    fn from(errors: Vec<String>) -> Self {
        ErrorResponse { errors }
    }
}

// store client failures all surface as 500
impl From<sbrest::Error> for ApiError {
    fn from(err: sbrest::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

// unwrap errors raised inside web::block
impl From<BlockingError<ApiError>> for ApiError {
    fn from(err: BlockingError<ApiError>) -> Self {
        match err {
            BlockingError::Error(e) => e,
            BlockingError::Canceled => {
                ApiError::InternalServerError("blocking task canceled".into())
            }
        }
    }
}
