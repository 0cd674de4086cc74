use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use storefront_core::ProductId;
use storefront_products::{FilterEngine, FilterState, Product};

const TITLES: [&str; 6] = [
    "Nike Running Shoes",
    "Cotton T-Shirt",
    "Mens Casual Slim Fit",
    "Solid Gold Petite Micropave",
    "WD 2TB Elements Portable External Hard Drive",
    "Rain Jacket Women Windbreaker Striped Climbing Raincoats",
];

fn catalog(size: u64) -> Vec<Product> {
    (1..=size)
        .map(|n| Product {
            id: ProductId::new(n).unwrap(),
            title: format!("{} #{n}", TITLES[(n % TITLES.len() as u64) as usize]),
            price: (n % 500) as f64 + 0.99,
        })
        .collect()
}

fn filter_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_apply");

    let mut combined = FilterEngine::new();
    combined.set_filters(
        FilterState::default()
            .with_name("JACKET")
            .with_min_price(Some(50.0))
            .with_max_price(Some(400.0)),
    );
    let inactive = FilterEngine::new();

    for size in [10u64, 100, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("inactive", size), &products, |b, products| {
            b.iter(|| black_box(inactive.apply(black_box(products))).len())
        });

        group.bench_with_input(BenchmarkId::new("name_and_range", size), &products, |b, products| {
            b.iter(|| black_box(combined.apply(black_box(products))).len())
        });
    }

    group.finish();
}

criterion_group!(benches, filter_apply);
criterion_main!(benches);
