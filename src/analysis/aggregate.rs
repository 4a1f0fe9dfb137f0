//! Unweighted ensemble vote.

use super::types::{ModelResult, Prediction, Verdict};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateVerdict {
    pub verdict: Verdict,
    pub confidence: f64,
    pub avg_real: f64,
    pub avg_fake: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Averages confidences per bucket and picks the higher one.
///
/// Only REAL results land in the real bucket; every other prediction
/// (FAKE, UNCERTAIN, UNKNOWN, ERROR) counts toward fake. Ties go to FAKE.
pub fn aggregate(results: &[ModelResult]) -> AggregateVerdict {
    let (real, fake): (Vec<&ModelResult>, Vec<&ModelResult>) = results
        .iter()
        .partition(|result| result.prediction == Prediction::Real);

    let real_scores: Vec<f64> = real.iter().map(|r| r.confidence).collect();
    let fake_scores: Vec<f64> = fake.iter().map(|r| r.confidence).collect();

    let avg_real = mean(&real_scores);
    let avg_fake = mean(&fake_scores);

    let (verdict, confidence) = if avg_real > avg_fake {
        (Verdict::Real, avg_real)
    } else {
        (Verdict::Fake, avg_fake)
    };

    AggregateVerdict {
        verdict,
        confidence,
        avg_real,
        avg_fake,
    }
}
