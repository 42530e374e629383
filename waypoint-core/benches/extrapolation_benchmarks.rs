use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waypoint_core::algebra::normalize;
use waypoint_core::{Embedding, Extrapolate, StrategyKind, StrategyRegistry};

const DIM: usize = 512; // CLIP ViT-B/32 embedding width

// --- Data Generation Helper Functions ---

fn generate_unit_vector(dim: usize, rng: &mut StdRng) -> Embedding {
    let vec: Vec<f32> = (0..dim).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect(); // Values between -1 and 1
    let raw = Embedding::from(vec);
    normalize(raw.view()).into()
}

fn generate_path(len: usize, dim: usize, seed: u64) -> Vec<Embedding> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| generate_unit_vector(dim, &mut rng)).collect()
}

// --- Benchmark Functions ---

fn bench_strategies(c: &mut Criterion) {
    let registry = StrategyRegistry::with_defaults();

    for kind in StrategyKind::ALL {
        let mut group = c.benchmark_group(format!("extrapolate_{}", kind));
        let strategy = registry.by_kind(kind);

        for len in [2usize, 10, 50, 200].iter() {
            let path = generate_path(*len, DIM, 1);
            group.throughput(Throughput::Elements(*len as u64));
            group.bench_with_input(BenchmarkId::from_parameter(len), &path, |b, path| {
                b.iter(|| strategy.extrapolate(black_box(path)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let registry = StrategyRegistry::with_defaults();
    let path = generate_path(15, DIM, 2);

    c.bench_function("registry_default_dispatch", |b| {
        b.iter(|| registry.extrapolate(black_box(None), black_box(&path)).unwrap());
    });
}

criterion_group!(benches, bench_strategies, bench_registry_dispatch);
criterion_main!(benches);
