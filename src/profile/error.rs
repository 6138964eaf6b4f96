use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use log::{debug, warn};
use thiserror::Error;

use super::models::{FieldError, FieldErrorsResponseModel};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile form is invalid: {} field error(s)", .0.len())]
    InvalidForm(Vec<FieldError>),
    #[error("Could not read profile form body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        return match self {
            Error::InvalidForm(errors) => {
                debug!("Rejected profile form with {} field error(s)", errors.len());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(FieldErrorsResponseModel { errors }),
                )
                    .into_response()
            },
            Error::MalformedBody(rejection) => {
                warn!("{}", rejection);
                (rejection.status(), rejection.body_text()).into_response()
            }
        };
    }
}
