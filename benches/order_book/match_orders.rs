use criterion::{BenchmarkId, Criterion};
use limitbook_rs::{Lifetime, OrderBook, Side};
use std::hint::black_box;

/// Register all benchmarks for matching orders in an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");
    group.sample_size(100);

    group.bench_function("match_immediate_against_single_level", |b| {
        b.iter(|| {
            let mut order_book = setup_ask_book(100, 1);
            black_box(order_book.add_order("taker", Side::Buy, 1000, 50, Lifetime::Immediate))
        })
    });

    group.bench_function("match_resting_sweeping_levels", |b| {
        b.iter(|| {
            let mut order_book = setup_ask_book(100, 20);
            black_box(order_book.add_order("taker", Side::Buy, 1019, 500, Lifetime::Resting))
        })
    });

    group.bench_function("peek_match", |b| {
        let order_book = setup_ask_book(100, 20);
        b.iter(|| black_box(order_book.peek_match(Side::Buy, 1019, 500)))
    });

    for match_quantity in [10u64, 50, 100, 200, 500].iter() {
        group.bench_with_input(
            BenchmarkId::new("match_quantity_scaling", match_quantity),
            match_quantity,
            |b, &match_quantity| {
                b.iter(|| {
                    let mut order_book = setup_ask_book(50, 5);
                    black_box(order_book.add_order(
                        "taker",
                        Side::Buy,
                        1004,
                        match_quantity,
                        Lifetime::Immediate,
                    ))
                })
            },
        );
    }

    group.finish();
}

// Ask book with `order_count` orders of 10 spread over `levels` prices from 1000 up
fn setup_ask_book(order_count: u64, levels: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");

    for i in 0..order_count {
        order_book.add_order(
            format!("ask{i}"),
            Side::Sell,
            1000 + (i % levels),
            10,
            Lifetime::Resting,
        );
    }

    order_book
}
