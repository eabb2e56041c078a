use criterion::Criterion;
use limitbook_rs::{Lifetime, OrderBook, Side};
use std::hint::black_box;
use std::io::Cursor;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("realistic_trading_scenario", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");

            // Phase 1: Build both sides of the book
            for i in 0..50u64 {
                black_box(order_book.add_order(
                    format!("bid{i}"),
                    Side::Buy,
                    990 + i % 10,
                    10,
                    Lifetime::Resting,
                ));
                black_box(order_book.add_order(
                    format!("ask{i}"),
                    Side::Sell,
                    1010 + i % 10,
                    10,
                    Lifetime::Resting,
                ));
            }

            // Phase 2: Requeue some bids
            for i in (0..50u64).step_by(5) {
                black_box(order_book.modify_order(&format!("bid{i}"), Side::Buy, 995, 15));
            }

            // Phase 3: Aggressive orders on both sides
            for i in 0..10u64 {
                black_box(order_book.add_order(
                    format!("take_buy{i}"),
                    Side::Buy,
                    1015,
                    25,
                    Lifetime::Immediate,
                ));
                black_box(order_book.add_order(
                    format!("take_sell{i}"),
                    Side::Sell,
                    992,
                    25,
                    Lifetime::Resting,
                ));
            }

            // Phase 4: Cancel what is left of the bids
            for i in 0..50u64 {
                black_box(order_book.cancel_order(&format!("bid{i}")));
            }

            black_box(order_book.print())
        })
    });

    let stream = session_stream(500);
    group.bench_function("process_text_stream", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            let mut sink = Vec::with_capacity(64 * 1024);
            black_box(order_book.process_stream(Cursor::new(stream.as_bytes()), &mut sink))
        })
    });

    group.finish();
}

fn session_stream(operations: u64) -> String {
    let mut lines = Vec::with_capacity(operations as usize);
    for i in 0..operations {
        let line = match i % 7 {
            0 | 1 => format!("BUY GFD {} 10 o{i}", 990 + i % 20),
            2 | 3 => format!("SELL GFD {} 10 o{i}", 1000 + i % 20),
            4 => format!("SELL IOC {} 15 o{i}", 985 + i % 10),
            5 => format!("CANCEL o{}", i - 5),
            _ => format!("MODIFY o{} BUY {} 12", i - 6, 995 + i % 5),
        };
        lines.push(line);
    }
    lines.push("PRINT".to_string());
    lines.join("\n")
}
