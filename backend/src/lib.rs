pub mod routes;
pub mod processor;
pub mod quotes;
pub mod config;
pub mod cors;
pub mod error;
pub mod catchers;
pub mod pages;
pub use shared::{models::*, caller::Caller, ledger::LikeLedger, ErrorResponse};

use rocket::{routes, catchers, Build, Rocket};
use crate::{
    routes::{all_options, stock_prices, AppState},
    cors::{CORS, SecurityHeaders},
    catchers::{bad_request, internal_error, not_found, unprocessable},
    pages::{index, static_handler},
};

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .attach(SecurityHeaders)
        .manage(state)
        .mount("/api", routes![stock_prices, all_options])
        .mount("/", routes![index, static_handler])
        .register(
            "/",
            catchers![
                bad_request,
                unprocessable,
                internal_error,
                not_found
            ],
        )
}
