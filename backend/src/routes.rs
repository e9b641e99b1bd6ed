use rocket::{State, get, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::{caller::Caller, ledger::LikeLedger, models::StockPriceResponse, validation::validate_stock_query};
use crate::{
    error::ApiError,
    processor::StockProcessor,
    quotes::QuoteSource,
};

pub struct AppState {
    pub ledger: LikeLedger,
    pub quotes: Box<dyn QuoteSource>,
}

impl AppState {
    pub fn new(quotes: impl QuoteSource + 'static) -> Self {
        Self {
            ledger: LikeLedger::new(),
            quotes: Box::new(quotes),
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, caller))]
#[get("/stock-prices?<stock>&<like>")]
pub async fn stock_prices(
    state: &State<AppState>,
    stock: Option<Vec<String>>,
    like: Option<String>,
    caller: Caller,
) -> Result<Json<StockPriceResponse>, ApiError> {
    let query = validate_stock_query(stock, like.as_deref()).map_err(|e| {
        debug!("Rejected stock query: {}", e);
        ApiError::InvalidQuery(e)
    })?;

    StockProcessor::lookup(state, &query, &caller).await.map(Json)
}
