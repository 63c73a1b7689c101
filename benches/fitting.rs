use criterion::{criterion_group, criterion_main, Criterion};
use linear_lens::{
    fit, generate, predict, rng, split, statistics::metrics, GenerationConfig, LinearFit,
    Observation,
};
use std::hint::black_box;

fn gen_sample_data(n: usize) -> Vec<Observation> {
    let config = GenerationConfig::new(n, 2.5, 5000.0, 4000.0);
    generate(&config, &mut rng(Some(42))).expect("Failed to generate data")
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // How the closed-form fit scales with data size
    println!("Benchmarking fit vs n...");
    test_linear_criterion_group(
        c,
        "fit_vs_n",
        &[
            CriterionTestEntry::new("n=100", 1e2, gen_sample_data(100)),
            CriterionTestEntry::new("n=1_000", 1e3, gen_sample_data(1_000)),
            CriterionTestEntry::new("n=10_000", 1e4, gen_sample_data(10_000)),
            CriterionTestEntry::new("n=100_000", 1e5, gen_sample_data(100_000)),
        ],
        |b, data| b.iter(|| fit(black_box(data)).expect("Failed to fit data")),
    );

    //
    // The rest of a session's pipeline, at the largest interactive sample size
    println!("Benchmarking pipeline stages (n=200)...");
    let samples = gen_sample_data(200);
    let model = fit(&samples).expect("Failed to fit data");
    let predicted = predict(&samples, &model);

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("generate", |b| {
        let config = GenerationConfig::new(200, 2.5, 5000.0, 4000.0);
        let mut rng = rng(Some(1));
        b.iter(|| generate(black_box(&config), &mut rng))
    });
    group.bench_function("split", |b| {
        let mut rng = rng(Some(2));
        b.iter(|| split(black_box(&samples), 0.2, &mut rng))
    });
    group.bench_function("predict", |b| {
        b.iter(|| predict(black_box(&samples), black_box(&model)))
    });
    group.bench_function("metrics", |b| b.iter(|| metrics(black_box(&predicted))));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn get_data_for_run<V>(group_id: &str, tests: &[CriterionTestEntry<V>]) -> Vec<Observation> {
    // Each test corresponds to a different x value in the series
    tests
        .iter()
        .enumerate()
        .map(|(i, test)| {
            let y = get_sample_for_run(group_id, &test.id);
            Observation::new(i + 1, test.x, y)
        })
        .collect()
}

fn get_sample_for_run(group_id: &str, test_id: &str) -> f64 {
    #[derive(serde::Deserialize)]
    struct CriterionSamples {
        iters: Vec<f64>,
        times: Vec<f64>,
    }

    let raw = std::fs::read_to_string(format!(
        "target/criterion/{group_id}/{test_id}/new/sample.json"
    ))
    .expect("Failed to read sample data");
    let samples: CriterionSamples =
        serde_json::from_str(&raw).expect("Failed to parse sample data");

    samples
        .iters
        .iter()
        .zip(samples.times.iter())
        .map(|(i, t)| t / i)
        .sum::<f64>()
        / (samples.iters.len() as f64)
}

struct CriterionTestEntry<V> {
    id: String,
    x: f64,
    values: V,
}
impl<V> CriterionTestEntry<V> {
    pub fn new(id: &str, x: f64, values: V) -> Self {
        Self {
            id: id.to_string(),
            x,
            values,
        }
    }
}

fn test_linear_criterion_group<F, V>(
    c: &mut Criterion,
    id: &str,
    samples: &[CriterionTestEntry<V>],
    runner: F,
) where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c V),
{
    let mut group = c.benchmark_group(id);
    for sample in samples {
        group.bench_with_input(&sample.id, &sample.values, &runner);
    }
    group.finish();

    // Fitting is O(n), so time per run should itself be close to a line in n
    let data = get_data_for_run(id, samples);
    let timing = LinearFit::new(&data).expect("Failed to fit timings");
    linear_lens::assert_r_squared!(timing);
}
