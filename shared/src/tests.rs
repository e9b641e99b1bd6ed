#[cfg(test)]
mod tests {
    use crate::caller::{caller_address, Caller};
    use crate::ledger::{relative_likes, LikeLedger};
    use crate::models::{StockPayload, StockPriceResponse, StockQuote, StockSelection};
    use crate::validation::{validate_stock_query, ValidationError};
    use crate::voter::resolve;

    fn symbols(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_resolve_is_sha256_hex() {
        assert_eq!(
            resolve("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            resolve("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(resolve("1.2.3.4").short().len(), 8);
    }

    #[test]
    fn test_resolve_deterministic_and_distinct() {
        let addresses = ["1.2.3.4", "1.2.3.5", "::1", "2001:db8::1", "::ffff:10.0.0.1", "not an ip"];
        for a in addresses {
            let id = resolve(a);
            assert_eq!(id, resolve(a));
            assert_eq!(id.as_str().len(), 64);
            assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            assert!(!id.as_str().contains(a));
        }
        for (i, a) in addresses.iter().enumerate() {
            for b in &addresses[i + 1..] {
                assert_ne!(resolve(a), resolve(b), "{} and {} collided", a, b);
            }
        }
    }

    #[test]
    fn test_unknown_symbol_has_no_likes() {
        let ledger = LikeLedger::new();
        assert_eq!(ledger.count_likes("GOOG"), 0);
        assert_eq!(ledger.count_likes(""), 0);
        assert_eq!(ledger.symbol_count(), 0, "reading must not create entries");
    }

    #[test]
    fn test_single_like() {
        let ledger = LikeLedger::new();
        ledger.record_like("GOOG", &resolve("1.2.3.4"));
        assert_eq!(ledger.count_likes("GOOG"), 1);
        assert_eq!(ledger.symbol_count(), 1);
    }

    #[test]
    fn test_likes_deduplicated_per_voter() {
        let ledger = LikeLedger::new();
        let first = resolve("1.2.3.4");
        let second = resolve("5.6.7.8");

        ledger.record_like("GOOG", &first);
        ledger.record_like("GOOG", &first);
        assert_eq!(ledger.count_likes("GOOG"), 1);

        ledger.record_like("GOOG", &second);
        assert_eq!(ledger.count_likes("GOOG"), 2);

        ledger.record_like("GOOG", &first);
        assert_eq!(ledger.count_likes("GOOG"), 2);
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        let ledger = LikeLedger::new();
        ledger.record_like("GOOG", &resolve("1.2.3.4"));
        assert_eq!(ledger.count_likes("GOOG"), 1);
        assert_eq!(ledger.count_likes("goog"), 0);
    }

    #[test]
    fn test_same_voter_across_symbols() {
        let ledger = LikeLedger::new();
        let voter = resolve("1.2.3.4");
        ledger.record_like("GOOG", &voter);
        ledger.record_like("MSFT", &voter);
        assert_eq!(ledger.count_likes("GOOG"), 1);
        assert_eq!(ledger.count_likes("MSFT"), 1);
        assert_eq!(ledger.symbol_count(), 2);
    }

    #[test]
    fn test_relative_likes() {
        assert_eq!(relative_likes(3, 1), (2, -2));
        assert_eq!(relative_likes(0, 0), (0, 0));
        assert_eq!(relative_likes(0, 4), (-4, 4));
        for (a, b) in [(0, 7), (7, 0), (12, 12), (1000, 3)] {
            let (ra, rb) = relative_likes(a, b);
            assert_eq!(ra + rb, 0);
        }
    }

    #[test]
    fn test_ledger_relative_likes() {
        let ledger = LikeLedger::new();
        for ip in ["1.1.1.1", "2.2.2.2", "3.3.3.3"] {
            ledger.record_like("GOOG", &resolve(ip));
        }
        ledger.record_like("MSFT", &resolve("1.1.1.1"));

        assert_eq!(ledger.relative_likes("GOOG", "MSFT"), (2, -2));
        assert_eq!(ledger.relative_likes("MSFT", "GOOG"), (-2, 2));
        assert_eq!(ledger.relative_likes("GOOG", "AAPL"), (3, -3));
        assert_eq!(ledger.symbol_count(), 2);
    }

    #[test]
    fn test_concurrent_likes() {
        let ledger = LikeLedger::new();
        std::thread::scope(|scope| {
            for t in 0..8 {
                let ledger = &ledger;
                scope.spawn(move || {
                    for i in 0..50 {
                        // every thread likes with the same 50 addresses
                        let voter = resolve(&format!("10.0.0.{}", i));
                        ledger.record_like("GOOG", &voter);
                        if t % 2 == 0 {
                            ledger.record_like("MSFT", &voter);
                        }
                        let _ = ledger.count_likes("GOOG");
                    }
                });
            }
        });
        assert_eq!(ledger.count_likes("GOOG"), 50);
        assert_eq!(ledger.count_likes("MSFT"), 50);
    }

    #[test]
    fn test_validate_missing_symbol() {
        assert_eq!(validate_stock_query(None, Some("true")), Err(ValidationError::MissingSymbol));
        assert_eq!(validate_stock_query(Some(vec![]), None), Err(ValidationError::MissingSymbol));
        assert_eq!(validate_stock_query(symbols(&[""]), None), Err(ValidationError::MissingSymbol));
        assert_eq!(validate_stock_query(symbols(&["GOOG", "  "]), None), Err(ValidationError::MissingSymbol));
    }

    #[test]
    fn test_validate_limits() {
        assert_eq!(
            validate_stock_query(symbols(&["GOOG", "MSFT", "AAPL"]), None),
            Err(ValidationError::TooManySymbols)
        );
        let long = "X".repeat(33);
        assert_eq!(
            validate_stock_query(symbols(&[long.as_str()]), None),
            Err(ValidationError::SymbolTooLong)
        );
    }

    #[test]
    fn test_validate_keeps_symbols_and_like_flag() {
        let query = validate_stock_query(symbols(&["goog", "MSFT"]), Some("true")).unwrap();
        assert_eq!(query.selection, StockSelection::Pair("goog".into(), "MSFT".into()));
        assert_eq!(query.selection.symbols(), vec!["goog", "MSFT"]);
        assert!(query.like);

        let query = validate_stock_query(symbols(&["GOOG"]), None).unwrap();
        assert_eq!(query.selection, StockSelection::Single("GOOG".into()));

        assert!(!validate_stock_query(symbols(&["GOOG"]), None).unwrap().like);
        assert!(!validate_stock_query(symbols(&["GOOG"]), Some("false")).unwrap().like);
        assert!(!validate_stock_query(symbols(&["GOOG"]), Some("TRUE")).unwrap().like);
        assert!(!validate_stock_query(symbols(&["GOOG"]), Some("1")).unwrap().like);
    }

    #[test]
    fn test_caller_address_precedence() {
        let peer = Some("9.9.9.9".to_string());
        assert_eq!(caller_address(Some("1.2.3.4"), Some("5.6.7.8"), peer.clone()), "1.2.3.4");
        assert_eq!(caller_address(None, Some("5.6.7.8, 10.0.0.1"), peer.clone()), "5.6.7.8");
        assert_eq!(caller_address(Some(" "), None, peer.clone()), "9.9.9.9");
        assert_eq!(caller_address(None, None, None), "");
    }

    #[test]
    fn test_caller_voter_matches_resolve() {
        let caller = Caller::from_address("1.2.3.4");
        assert_eq!(caller.voter, resolve("1.2.3.4"));
        assert_eq!(Caller::from_address("").voter, resolve(""));
    }

    #[test]
    fn test_response_shapes() {
        let goog = StockQuote { symbol: "GOOG".into(), price: 786.9 };
        let msft = StockQuote { symbol: "MSFT".into(), price: 62.3 };

        let single = serde_json::to_value(StockPriceResponse::single(goog.clone(), 1)).unwrap();
        assert_eq!(single, serde_json::json!({
            "stockData": { "stock": "GOOG", "price": 786.9, "likes": 1 }
        }));

        let pair = StockPriceResponse::pair(goog, msft, (1, -1));
        assert!(matches!(pair.stock_data, StockPayload::Pair(_)));
        assert_eq!(serde_json::to_value(pair).unwrap(), serde_json::json!({
            "stockData": [
                { "stock": "GOOG", "price": 786.9, "rel_likes": 1 },
                { "stock": "MSFT", "price": 62.3, "rel_likes": -1 }
            ]
        }));
    }
}
