use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use crate::voter::VoterId;

type Likes = HashMap<String, HashSet<VoterId>>;

/// In-memory like counts keyed by case-sensitive stock symbol.
///
/// Each symbol maps to the distinct voters who liked it, so a voter can only
/// ever contribute one like per symbol. Entries are created on the first like
/// and live until the process exits.
#[derive(Debug, Default)]
pub struct LikeLedger {
    likes: Mutex<Likes>,
}

impl LikeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // None of the operations can leave the map half-updated, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Likes> {
        self.likes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_like(&self, symbol: &str, voter: &VoterId) {
        let mut likes = self.lock();
        match likes.get_mut(symbol) {
            Some(voters) => {
                voters.insert(voter.clone());
            }
            None => {
                likes.insert(symbol.to_string(), HashSet::from([voter.clone()]));
            }
        }
    }

    pub fn count_likes(&self, symbol: &str) -> usize {
        self.lock().get(symbol).map_or(0, HashSet::len)
    }

    /// Number of symbols with at least one like.
    pub fn symbol_count(&self) -> usize {
        self.lock().len()
    }

    /// Relative likes of `a` against `b`, both counts read under one lock.
    pub fn relative_likes(&self, a: &str, b: &str) -> (i64, i64) {
        let likes = self.lock();
        let count = |symbol: &str| likes.get(symbol).map_or(0, HashSet::len);
        relative_likes(count(a), count(b))
    }
}

pub fn relative_likes(count_a: usize, count_b: usize) -> (i64, i64) {
    let (a, b) = (count_a as i64, count_b as i64);
    (a - b, b - a)
}
