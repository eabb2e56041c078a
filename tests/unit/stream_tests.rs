//! Text stream processing against recorded sessions

#[cfg(test)]
mod stream_tests {
    use limitbook_rs::OrderBook;
    use std::io::Cursor;

    const MIXED_SESSION: &str = include_str!("fixtures/mixed_session.txt");
    const MIXED_SESSION_EXPECTED: &str = include_str!("fixtures/mixed_session.expected");

    fn run(input: &str) -> (OrderBook, String) {
        let mut book = OrderBook::new("SESSION");
        let mut output = Vec::new();
        book.process_stream(Cursor::new(input), &mut output)
            .expect("in-memory stream should not fail");
        (book, String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn test_mixed_session_output() {
        let (book, output) = run(MIXED_SESSION);

        assert_eq!(output, MIXED_SESSION_EXPECTED);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_mixed_session_final_book() {
        let (book, _) = run(MIXED_SESSION);

        assert_eq!(book.best_bid(), Some(9100));
        assert_eq!(book.best_ask(), Some(9300));
        assert_eq!(book.get_order("order22").map(|order| order.quantity), Some(36));
        assert_eq!(book.get_order("order7").map(|order| order.quantity), Some(5));
        assert!(!book.contains_order("order21"));
        assert!(!book.contains_order("order25"));
        assert_eq!(book.last_trade_price(), Some(9100));
    }

    #[test]
    fn test_modify_of_immediate_order_is_ignored() {
        let (book, output) = run("SELL IOC 100 5 x\nMODIFY x BUY 100 5\nPRINT\n");

        assert_eq!(output, "SELL:\nBUY:\n");
        assert!(!book.contains_order("x"));
    }

    #[test]
    fn test_duplicate_id_is_ignored() {
        let (_, output) = run("BUY GFD 100 5 dup\nBUY GFD 200 7 dup\nPRINT\n");

        assert_eq!(output, "SELL:\nBUY:\n100 5\n");
    }
}
