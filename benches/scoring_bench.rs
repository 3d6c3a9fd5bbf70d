use criterion::{criterion_group, criterion_main, Criterion};
use j16t::chart::ChartProjector;
use j16t::config::ScoringConfig;
use j16t::content::ContentStore;
use j16t::ledger::ResponseLedger;
use j16t::scorer::Scorer;
use std::hint::black_box;

fn setup_ledger() -> ResponseLedger {
    let content = ContentStore::reference();
    let mut ledger = ResponseLedger::for_content(&content);
    ledger.fill_random(&mut fastrand::Rng::with_seed(99));
    ledger
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::new(ScoringConfig::default()).expect("default calibration is valid");
    let projector = ChartProjector::new(&scorer);
    let ledger = setup_ledger();

    c.bench_function("score (80 answers)", |b| {
        b.iter(|| scorer.score(black_box(&ledger)))
    });

    let report = scorer.score(&ledger);
    c.bench_function("project both views", |b| {
        b.iter(|| {
            let report = black_box(&report);
            (projector.primary(report), projector.paired(report))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
