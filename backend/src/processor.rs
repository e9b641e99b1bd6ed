use futures::future::try_join;
use shared::{caller::Caller, models::*};
use tracing::{debug, error};
use crate::{error::ApiError, quotes::QuoteError, routes::AppState};

pub struct StockProcessor;

impl StockProcessor {
    /// Fetches every requested quote, applies the caller's like, and shapes
    /// the response. Likes are only recorded once all quotes arrived.
    pub async fn lookup(state: &AppState, query: &StockQuery, caller: &Caller) -> Result<StockPriceResponse, ApiError> {
        match &query.selection {
            StockSelection::Single(symbol) => {
                let quote = state.quotes.fetch_quote(symbol)
                    .await
                    .map_err(|e| Self::upstream_failure(query, e))?;

                Self::apply_like(state, query, caller);
                Ok(StockPriceResponse::single(quote, state.ledger.count_likes(symbol)))
            }
            StockSelection::Pair(first, second) => {
                let (first_quote, second_quote) = try_join(
                    state.quotes.fetch_quote(first),
                    state.quotes.fetch_quote(second),
                )
                .await
                .map_err(|e| Self::upstream_failure(query, e))?;

                Self::apply_like(state, query, caller);
                let relative = state.ledger.relative_likes(first, second);
                Ok(StockPriceResponse::pair(first_quote, second_quote, relative))
            }
        }
    }

    fn apply_like(state: &AppState, query: &StockQuery, caller: &Caller) {
        if !query.like {
            return;
        }
        for symbol in query.selection.symbols() {
            state.ledger.record_like(symbol, &caller.voter);
        }
        debug!("Recorded like from {} for {:?}", caller.voter.short(), query.selection.symbols());
    }

    fn upstream_failure(query: &StockQuery, e: QuoteError) -> ApiError {
        error!("Quote lookup for {:?} failed: {}", query.selection.symbols(), e);
        ApiError::Upstream(e)
    }
}
