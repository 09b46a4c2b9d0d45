//! Metrics
//!
//! Scores for comparing raw and calibrated probabilities.
use crate::constants::EPSILON;

/// Mean squared difference between the predicted probability and the binary outcome.
pub fn brier_score(y_true: &[f64], y_prob: &[f64]) -> f64 {
    let n = y_true.len();
    if n == 0 {
        return f64::NAN;
    }
    let sum: f64 = y_true.iter().zip(y_prob).map(|(y, p)| (p - y).powi(2)).sum();
    sum / n as f64
}

/// Mean negative log likelihood of the binary outcomes.
///
/// Probabilities are clipped to `[EPSILON, 1 - EPSILON]` so that a confident
/// miss stays finite.
pub fn log_loss(y_true: &[f64], y_prob: &[f64]) -> f64 {
    let n = y_true.len();
    if n == 0 {
        return f64::NAN;
    }
    let sum: f64 = y_true
        .iter()
        .zip(y_prob)
        .map(|(y, p)| {
            let p = p.clamp(EPSILON, 1.0 - EPSILON);
            -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        })
        .sum();
    sum / n as f64
}
