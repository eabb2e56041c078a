// demos/src/bin/basic_book.rs

use limitbook_rs::{BookEvent, Lifetime, Operation, OrderBook, Side};
use pricelevel::setup_logger;
use tracing::{info, warn};

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    let mut book = OrderBook::new("ACME");

    demo_adding_orders(&mut book);
    display_orderbook_state(&book);

    demo_matching(&mut book);
    demo_immediate_orders(&mut book);
    demo_modify_and_cancel(&mut book);
    demo_text_operations(&mut book);

    info!("Final OrderBook State:");
    display_orderbook_state(&book);

    if let Err(err) = book.validate() {
        warn!("Book failed validation: {}", err);
    }
}

fn demo_adding_orders(book: &mut OrderBook) {
    info!("Adding resting orders to the OrderBook...");

    for i in 0..5u64 {
        let price = 9900 + i * 20;
        let quantity = 10 + i * 5;
        let id = format!("bid{i}");
        book.add_order(id.clone(), Side::Buy, price, quantity, Lifetime::Resting);
        info!("Added buy {} at {} for {}", id, price, quantity);
    }

    for i in 0..5u64 {
        let price = 10100 + i * 20;
        let quantity = 10 + i * 5;
        let id = format!("ask{i}");
        book.add_order(id.clone(), Side::Sell, price, quantity, Lifetime::Resting);
        info!("Added sell {} at {} for {}", id, price, quantity);
    }
}

fn display_orderbook_state(book: &OrderBook) {
    info!(
        "Best bid: {:?}, best ask: {:?}, spread: {:?}, mid: {:?}",
        book.best_bid(),
        book.best_ask(),
        book.spread(),
        book.mid_price()
    );
    info!(
        "{} resting orders on {} bid and {} ask levels",
        book.order_count(),
        book.level_count(Side::Buy),
        book.level_count(Side::Sell)
    );
    for line in book.print().lines() {
        info!("  {}", line);
    }
}

fn demo_matching(book: &mut OrderBook) {
    info!("Submitting a crossing sell...");
    let available = book.peek_match(Side::Sell, 9940, 50);
    info!("A sell at 9940 for 50 could fill {} right now", available);

    for trade in book.add_order("sweep", Side::Sell, 9940, 50, Lifetime::Resting) {
        info!("{} (transaction {})", trade, trade.transaction_id);
    }
    if let Some(order) = book.get_order("sweep") {
        info!("Remainder now rests: {}", order);
    }
}

fn demo_immediate_orders(book: &mut OrderBook) {
    info!("Submitting an immediate-or-cancel buy larger than the best ask...");
    let trades = book.add_order("ioc1", Side::Buy, 10100, 100, Lifetime::Immediate);
    for trade in &trades {
        info!("{}", trade);
    }
    info!(
        "ioc1 filled {} and rests: {}",
        trades.iter().map(|trade| trade.quantity).sum::<u64>(),
        book.contains_order("ioc1")
    );
}

fn demo_modify_and_cancel(book: &mut OrderBook) {
    if let Some(order) = book.get_order("bid1") {
        info!("Before modify: {}", order);
    }
    book.modify_order("bid1", Side::Buy, 9920, 30);
    if let Some(order) = book.get_order("bid1") {
        info!("After modify (new stamp): {}", order);
    }

    match book.cancel_order("bid0") {
        Some(order) => info!("Cancelled {}", order),
        None => info!("bid0 was not resting"),
    }
    if book.cancel_order("missing").is_none() {
        info!("Cancelling an unknown order is a no-op");
    }
}

fn demo_text_operations(book: &mut OrderBook) {
    info!("Applying text operations...");
    for line in ["BUY GFD 10120 5 text1", "SELL IOC 0 5 bad", "PRINT"] {
        match line.parse::<Operation>() {
            Ok(operation) => {
                for event in book.process(operation) {
                    match event {
                        BookEvent::Trade(trade) => info!("{}", trade),
                        BookEvent::Depth(snapshot) => info!("\n{}", snapshot),
                    }
                }
            }
            Err(err) => info!("Dropped '{}': {}", line, err),
        }
    }
}
