// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// Measures a full evaluation (normalize + canonicalize + match + score) on
// call lists of increasing size, in loose and strict mode.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

use tooljudge::core::types::MetricType;
use tooljudge::evaluator::ToolCallSequenceGrader;

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Build N calls over a small tool vocabulary, mixing all wrapper shapes and
/// both argument encodings.
fn build_calls(n: usize, seed: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let name = format!("tool_{}", (i + seed) % 25);
            let args = json!({"query": format!("q{}", i % 7), "limit": i % 3});
            match i % 3 {
                0 => json!({"name": name, "arguments": args}),
                1 => json!({"function": {"name": name, "arguments": args.to_string()}}),
                _ => json!({"tool_call": {"function": {"name": name, "arguments": args}}}),
            }
        })
        .collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for size in [10usize, 100, 1_000] {
        let predicted = build_calls(size, 0);
        let reference = build_calls(size, 3);

        for (label, match_arguments) in [("loose", false), ("strict", true)] {
            let grader = ToolCallSequenceGrader::new(MetricType::Recall, match_arguments);
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| grader.score(black_box(&predicted), black_box(&reference)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
