// benches/percolation_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use percolation_sim::percolation::Percolation;
use percolation_sim::simulation::{run_trial, trial_rng};
use rand::seq::SliceRandom;

fn benchmark_open_all_sites(c: &mut Criterion) {
    let n = 100;
    let mut order: Vec<(usize, usize)> = (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (row, col)))
        .collect();
    order.shuffle(&mut trial_rng(1, 0));

    c.bench_function("open_all_sites_100x100", |b| {
        b.iter(|| {
            let mut perc = Percolation::new(n).unwrap();
            for &(row, col) in &order {
                perc.open(row, col).unwrap();
            }
            black_box(perc.percolates().unwrap())
        })
    });
}

fn benchmark_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_trial");
    for n in [32, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = trial_rng(7, 0);
            b.iter(|| black_box(run_trial(n, &mut rng).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_open_all_sites, benchmark_single_trial);
criterion_main!(benches);
