//! End-to-end scenarios driven through the public book API

#[cfg(test)]
mod scenario_tests {
    use limitbook_rs::{BookEvent, Lifetime, Operation, OrderBook, Side};

    fn depth_lines(book: &OrderBook) -> Vec<String> {
        book.print().lines()
    }

    #[test]
    fn test_resting_buy_shows_in_depth() {
        let mut book = OrderBook::new("SCN");

        let trades = book.add_order("o1", Side::Buy, 100, 10, Lifetime::Resting);

        assert!(trades.is_empty());
        assert_eq!(depth_lines(&book), vec!["SELL:", "BUY:", "100 10"]);
    }

    #[test]
    fn test_crossing_sell_fills_against_resting_buy() {
        let mut book = OrderBook::new("SCN");
        book.add_order("o1", Side::Buy, 100, 10, Lifetime::Resting);

        let trades = book.add_order("o2", Side::Sell, 90, 5, Lifetime::Resting);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].to_string(), "TRADE o1 100 5 o2 90 5");
        assert_eq!(book.get_order("o1").map(|order| order.quantity), Some(5));
        assert!(!book.contains_order("o2"));
        assert!(book.get_orders_at_price(90, Side::Sell).is_empty());
        assert_eq!(book.last_trade_price(), Some(100));
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_cancel_empties_side() {
        let mut book = OrderBook::new("SCN");
        book.add_order("o1", Side::Buy, 100, 10, Lifetime::Resting);
        book.add_order("o2", Side::Sell, 90, 5, Lifetime::Resting);

        let cancelled = book.cancel_order("o1").expect("o1 should still rest");

        assert_eq!(cancelled.quantity, 5);
        assert_eq!(depth_lines(&book), vec!["SELL:", "BUY:"]);
        assert_eq!(book.order_count(), 0);
    }

    #[test]
    fn test_immediate_order_against_empty_book_vanishes() {
        let mut book = OrderBook::new("SCN");

        let trades = book.add_order("o3", Side::Sell, 50, 20, Lifetime::Immediate);

        assert!(trades.is_empty());
        assert!(!book.contains_order("o3"));
        assert_eq!(book.level_count(Side::Sell), 0);
        assert_eq!(book.level_count(Side::Buy), 0);
    }

    #[test]
    fn test_modified_order_loses_time_priority() {
        let mut book = OrderBook::new("SCN");
        book.add_order("o4", Side::Buy, 100, 10, Lifetime::Resting);
        book.add_order("o6", Side::Buy, 100, 10, Lifetime::Resting);
        book.modify_order("o4", Side::Buy, 100, 10);

        let trades = book.add_order("o5", Side::Sell, 100, 10, Lifetime::Resting);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].to_string(), "TRADE o6 100 10 o5 100 10");
        assert_eq!(book.get_order("o4").map(|order| order.quantity), Some(10));
        assert!(!book.contains_order("o6"));
    }

    #[test]
    fn test_parsed_operations_produce_events() {
        let mut book = OrderBook::new("SCN");
        let mut rendered = Vec::new();

        for line in [
            "SELL GFD 105 4 a1",
            "SELL GFD 103 6 a2",
            "BUY IOC 105 8 b1",
            "PRINT",
        ] {
            let operation: Operation = line.parse().expect("valid operation");
            for event in book.process(operation) {
                if let BookEvent::Depth(snapshot) = &event {
                    assert_eq!(snapshot.symbol, "SCN");
                }
                rendered.push(event.to_string());
            }
        }

        assert_eq!(
            rendered,
            vec![
                "TRADE a2 103 6 b1 105 6",
                "TRADE a1 105 2 b1 105 2",
                "SELL:\n105 2\nBUY:",
            ]
        );
    }
}
