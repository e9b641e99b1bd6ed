use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
}

/// The symbols of a validated query: one stock, or two to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockSelection {
    Single(String),
    Pair(String, String),
}

impl StockSelection {
    pub fn symbols(&self) -> Vec<&str> {
        match self {
            StockSelection::Single(symbol) => vec![symbol.as_str()],
            StockSelection::Pair(first, second) => vec![first.as_str(), second.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    pub selection: StockSelection,
    pub like: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockData {
    pub stock: String,
    pub price: f64,
    pub likes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelativeStockData {
    pub stock: String,
    pub price: f64,
    pub rel_likes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StockPayload {
    Single(StockData),
    Pair([RelativeStockData; 2]),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceResponse {
    pub stock_data: StockPayload,
}

impl StockPriceResponse {
    pub fn single(quote: StockQuote, likes: usize) -> Self {
        Self {
            stock_data: StockPayload::Single(StockData {
                stock: quote.symbol,
                price: quote.price,
                likes,
            }),
        }
    }

    pub fn pair(first: StockQuote, second: StockQuote, (rel_first, rel_second): (i64, i64)) -> Self {
        Self {
            stock_data: StockPayload::Pair([
                RelativeStockData { stock: first.symbol, price: first.price, rel_likes: rel_first },
                RelativeStockData { stock: second.symbol, price: second.price, rel_likes: rel_second },
            ]),
        }
    }
}
