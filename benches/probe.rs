// benches/probe.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fraud_dash::core::{Availability, ModuleRegistry};
use fraud_dash::pages::{default_catalog, register_builtins};
use fraud_dash::router::{Router, Target};

fn bench_probe(c: &mut Criterion) {
    let dir = std::env::temp_dir().join("fraud_dash_bench_probe");
    let _ = std::fs::create_dir_all(dir.join("pages"));
    let _ = std::fs::write(dir.join("pages/transaction_predictor.py"), "");

    let catalog: Vec<_> = default_catalog().into_iter().map(|s| s.rooted(&dir)).collect();
    let mut registry = ModuleRegistry::new();
    register_builtins(&mut registry);

    c.bench_function("probe_catalog", |b| {
        b.iter(|| {
            let avail = Availability::probe(black_box(&catalog), black_box(&registry));
            black_box(avail.available_count())
        })
    });

    let flags = Availability::probe(&catalog, &registry);
    let resolver = fraud_dash::core::Resolver::new(
        registry,
        fraud_dash::core::ScriptRunner::new(&dir, Default::default()),
    );
    let router = Router::new(catalog, flags, resolver);

    c.bench_function("build_menu", |b| {
        b.iter(|| {
            let menu = router.menu();
            black_box(menu.iter().filter(|e| matches!(e.target, Target::Page(_))).count())
        })
    });
}

criterion_group!(benches, bench_probe);
criterion_main!(benches);
