//! Encode + predict cycle benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::{FeatureEncoder, FeatureVector, VehicleInput};
use inference_engine::{InferenceError, PredictionInvoker, PriceModel};
use std::sync::Arc;

struct LinearModel;

impl PriceModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        Ok(features.as_slice().iter().sum::<f64>() * 3.5 - 10_000.0)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

fn bench_cycle(c: &mut Criterion) {
    let encoder = FeatureEncoder::new();
    let invoker = PredictionInvoker::new(Arc::new(LinearModel));
    let input = VehicleInput {
        brand: "Toyota".to_string(),
        location: "Pune".to_string(),
        fuel_type: "Petrol".to_string(),
        transmission: "Manual".to_string(),
        ..Default::default()
    };

    c.bench_function("encode", |b| b.iter(|| encoder.encode(black_box(&input))));

    c.bench_function("encode_and_predict", |b| {
        b.iter(|| {
            encoder
                .encode(black_box(&input))
                .ok()
                .and_then(|features| invoker.predict(&features).ok())
        })
    });
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
