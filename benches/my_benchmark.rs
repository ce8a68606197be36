use criterion::{criterion_group, criterion_main, Criterion};
use monkey::Monkey;

fn fibonacci() {
    let src = r#"
        let fib = fn(n) {
            if (n < 2) { return n; }
            fib(n - 1) + fib(n - 2);
        };

        fib(20);
    "#;

    let mut monkey = Monkey::new();
    monkey.run(src).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree-walk");
    group.sample_size(20);
    group.bench_function("fib 20", |b| b.iter(|| fibonacci()));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
