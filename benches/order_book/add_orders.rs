use criterion::{BenchmarkId, Criterion};
use limitbook_rs::{Lifetime, OrderBook, Side};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // One level per order
    group.bench_function("add_resting_orders_distinct_prices", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                black_box(order_book.add_order(
                    format!("b{i}"),
                    Side::Buy,
                    1000 + i,
                    10,
                    Lifetime::Resting,
                ));
            }
        })
    });

    // Long FIFO queue at a single price
    group.bench_function("add_resting_orders_same_price", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                black_box(order_book.add_order(
                    format!("s{i}"),
                    Side::Sell,
                    1000,
                    10,
                    Lifetime::Resting,
                ));
            }
        })
    });

    group.bench_function("add_non_crossing_immediate_orders", |b| {
        let mut order_book = OrderBook::new("TEST-SYMBOL");
        order_book.add_order("ask", Side::Sell, 2000, 10, Lifetime::Resting);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            black_box(order_book.add_order(
                format!("ioc{i}"),
                Side::Buy,
                1000,
                10,
                Lifetime::Immediate,
            ))
        })
    });

    for order_count in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::new("TEST-SYMBOL");
                    for i in 0..order_count {
                        black_box(order_book.add_order(
                            format!("o{i}"),
                            Side::Buy,
                            1000 + (i % 50),
                            10,
                            Lifetime::Resting,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
