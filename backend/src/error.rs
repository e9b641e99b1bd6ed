use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{validation::ValidationError, ErrorResponse};
use thiserror::Error;
use crate::quotes::QuoteError;

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch stock price";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidQuery(#[from] ValidationError),
    #[error("Upstream failure: {0}")]
    Upstream(#[from] QuoteError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidQuery(_) => Status::BadRequest,
            ApiError::Upstream(_) => Status::InternalServerError,
        }
    }

    /// Message shown to the caller. Upstream detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidQuery(e) => e.to_string(),
            ApiError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(Json(ErrorResponse::new(self.public_message())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
