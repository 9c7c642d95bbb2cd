use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use taksir::form::InputRow;
use taksir::importance;
use taksir::inference;
use taksir::ml::ModelHandle;
use taksir::ml::gradient_boosting::GradientBoostingModel;
use taksir::schema::schema_of;

const FEATURE_COUNT: usize = 24;
const TREE_COUNT: usize = 300;

/// Depth-2 trees cycling through every feature.
fn synthetic_model() -> ModelHandle {
    let names: Vec<String> = (0..FEATURE_COUNT).map(|i| format!("fitur_{i}")).collect();
    let estimators: Vec<_> = (0..TREE_COUNT)
        .map(|t| {
            let root = t % FEATURE_COUNT;
            let child = (t + 1) % FEATURE_COUNT;
            json!({
                "children_left": [1, 3, 5, -1, -1, -1, -1],
                "children_right": [2, 4, 6, -1, -1, -1, -1],
                "feature": [root, child, child, -2, -2, -2, -2],
                "threshold": [0.5, 1.5, -0.5, -2.0, -2.0, -2.0, -2.0],
                "value": [0.0, 0.0, 0.0, -0.2, 0.1, 0.05, 0.3],
                "impurity": [1.0, 0.6, 0.4, 0.0, 0.0, 0.0, 0.0],
                "weighted_n_node_samples": [100.0, 60.0, 40.0, 30.0, 30.0, 20.0, 20.0]
            })
        })
        .collect();
    let model: GradientBoostingModel = serde_json::from_value(json!({
        "feature_names_in": names,
        "learning_rate": 0.05,
        "init_value": 14.0,
        "estimators": estimators
    }))
    .expect("synthetic model");
    model.validate().expect("valid model");
    ModelHandle::GradientBoosting {
        title: "bench".to_string(),
        model,
    }
}

fn bench_predict(c: &mut Criterion) {
    let handle = synthetic_model();
    let schema = schema_of(&handle);
    let row: InputRow = schema
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx as f64 * 0.25))
        .collect();
    c.bench_with_input(BenchmarkId::new("predict", TREE_COUNT), &row, |b, row| {
        b.iter(|| inference::predict(black_box(&handle), black_box(row)).expect("predict"));
    });
}

fn bench_importance_report(c: &mut Criterion) {
    let handle = synthetic_model();
    let schema = schema_of(&handle);
    c.bench_function("importance_report", |b| {
        b.iter(|| importance::report(black_box(&handle), black_box(&schema)));
    });
}

criterion_group!(benches, bench_predict, bench_importance_report);
criterion_main!(benches);
