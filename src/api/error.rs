use actix_multipart::MultipartError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub error: Cow<'static, str>,
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match *self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => {
                HttpResponse::build(self.status_code()).json(ErrorBody { error: msg.clone() })
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // io errors
    #[error("{0}")]
    Io(#[from] std::io::Error),
    // serde errors
    #[error("Post store is corrupt: {0}")]
    JsonError(#[from] serde_json::Error),
    // Custom Errors
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::BadRequest(msg) => {
                log::warn!("Rejected request: {}", msg);
                Error::BadRequest(msg)
            }
            _ => {
                log::error!("Request failed: {:?}", value);
                Error::BadRequest(value.to_string().into())
            }
        }
    }
}

// MultipartError is not Send, so it never travels inside SystemError.
impl From<MultipartError> for Error {
    fn from(err: MultipartError) -> Self {
        log::warn!("Malformed multipart payload: {}", err);
        Error::BadRequest(err.to_string().into())
    }
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }
}
