use crate::models::{StockQuery, StockSelection};

pub const MAX_SYMBOLS: usize = 2;
pub const MAX_SYMBOL_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Stock query parameter is required")]
    MissingSymbol,
    #[error("At most {MAX_SYMBOLS} stocks can be compared")]
    TooManySymbols,
    #[error("Stock symbol exceeds maximum length of {MAX_SYMBOL_LENGTH}")]
    SymbolTooLong,
}

/// Checks the raw `stock` and `like` query values. Symbols are kept exactly as
/// given; only the literal `"true"` registers a like.
pub fn validate_stock_query(stock: Option<Vec<String>>, like: Option<&str>) -> Result<StockQuery, ValidationError> {
    let symbols = stock.unwrap_or_default();

    if symbols.iter().any(|s| s.trim().is_empty()) { return Err(ValidationError::MissingSymbol); }
    if symbols.len() > MAX_SYMBOLS { return Err(ValidationError::TooManySymbols); }
    if symbols.iter().any(|s| s.len() > MAX_SYMBOL_LENGTH) { return Err(ValidationError::SymbolTooLong); }

    let mut symbols = symbols.into_iter();
    let selection = match (symbols.next(), symbols.next()) {
        (Some(first), None) => StockSelection::Single(first),
        (Some(first), Some(second)) => StockSelection::Pair(first, second),
        (None, _) => return Err(ValidationError::MissingSymbol),
    };

    Ok(StockQuery {
        selection,
        like: like == Some("true"),
    })
}
