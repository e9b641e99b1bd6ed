pub mod error;
pub mod models;
pub mod validation;
pub mod voter;
pub mod ledger;
pub mod caller;

pub use error::ErrorResponse;
pub use models::*;
pub use validation::*;
pub use voter::{resolve, VoterId};
pub use ledger::{relative_likes, LikeLedger};
pub use caller::Caller;

#[cfg(test)]
mod tests;
