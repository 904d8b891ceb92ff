use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use finance_tables::{find_product_by_price_id, map_account_subtype, map_investment_type, run};
use std::io;

struct NoopWriter;

impl io::Write for NoopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Just return the length of input without actually writing
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const SUBTYPES: [Option<&str>; 4] = [
    Some("CHECKING_ACCOUNT"),
    Some("CREDIT_CARD"),
    Some("UNKNOWN_TYPE"),
    None,
];

fn lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(SUBTYPES.len() as u64));

    group.bench_function("map_account_subtype", |b| {
        b.iter(|| {
            for subtype in SUBTYPES {
                black_box(map_account_subtype(black_box(subtype)));
            }
        });
    });

    group.bench_function("map_investment_type", |b| {
        b.iter(|| black_box(map_investment_type(black_box("manual"), black_box(Some("OUTRO")))));
    });

    group.bench_function("find_product_by_price_id", |b| {
        b.iter(|| {
            black_box(find_product_by_price_id(black_box("price_advanced_1990_placeholder")));
            black_box(find_product_by_price_id(black_box("nonexistent")));
        });
    });

    group.finish();
}

fn label_accounts(c: &mut Criterion) {
    c.bench_function("label_example_accounts", |b| {
        b.iter(|| {
            run("data/example_accounts.csv", NoopWriter).unwrap();
        });
    });
}

criterion_group!(benches, lookups, label_accounts);
criterion_main!(benches);
