use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mlc_sssp::graph::generators::{generate_grid, generate_random};
use mlc_sssp::graph::Network;
use mlc_sssp::{AllPairs, AllPairsShortestPaths, ApspConfig, Discipline, Method};

const SIZES: [usize; 2] = [64, 256];

fn run(graph: &Network<f64>, discipline: Discipline) -> AllPairs<f64> {
    let config = ApspConfig::new(Method::Deque).with_discipline(discipline);
    match AllPairsShortestPaths::new(config).run(graph) {
        Ok(result) => result,
        Err(e) => panic!("{} failed: {}", discipline, e),
    }
}

fn bench_all_pairs(c: &mut Criterion) {
    for (label, sparse) in [("random", true), ("grid", false)] {
        let mut group = c.benchmark_group(format!("apsp/{}", label));
        group.sample_size(10);
        group.warm_up_time(Duration::from_millis(200));

        for &size in &SIZES {
            let seed = 0x5EED_2020 ^ size as u64;
            let graph = if sparse {
                generate_random(size, 4.0, 100, seed)
            } else {
                let side = (size as f64).sqrt() as usize;
                generate_grid(side, side, 100, seed)
            }
            .expect("generated graph is consistent");

            for discipline in Discipline::ALL {
                group.bench_with_input(BenchmarkId::new(discipline.name(), size), &graph, |b, g| {
                    b.iter(|| black_box(run(g, discipline)));
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_all_pairs);
criterion_main!(benches);
