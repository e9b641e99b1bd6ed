use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

impl ErrorMessage {
    fn new(error: impl Into<String>, status: u16) -> Json<Self> {
        Json(Self { error: error.into(), status })
    }
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    ErrorMessage::new("Malformed request. Pass one or two `stock` symbols and an optional `like=true`.", 400)
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorMessage> {
    ErrorMessage::new("Query parameters could not be read as stock symbols.", 422)
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    ErrorMessage::new("Stock lookup failed unexpectedly.", 500)
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    ErrorMessage::new(format!("No endpoint at {}. Try /api/stock-prices?stock=GOOG", req.uri().path()), 404)
}
