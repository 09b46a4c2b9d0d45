//! Data
//!
//! Validation and ordering of the `(score, label)` pairs a calibration is fit on.
use crate::constants::MIN_UNIQUE_SCORES;
use crate::errors::MimicError;
use crate::utils::count_unique_sorted;
use log::warn;
use std::cmp::Ordering;

/// A single scored observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Raw score from the base classifier.
    pub score: f64,
    /// Whether the observation is a positive.
    pub label: bool,
    /// Position of the observation in the caller's input.
    pub index: usize,
}

/// Validate scores and labels, and return the samples ordered by ascending score.
///
/// Ties in score are broken by label (negatives first), then by input position,
/// so the resulting order is fully determined by the input.
///
/// * `scores` - Raw classifier scores. NaN and infinity are rejected, finite values
///   outside `[0, 1]` only warn.
/// * `labels` - Binary targets, each exactly `0.0` or `1.0`.
pub fn sorted_samples(scores: &[f64], labels: &[f64]) -> Result<Vec<Sample>, MimicError> {
    if scores.len() != labels.len() {
        return Err(MimicError::LengthMismatch(scores.len(), labels.len()));
    }
    if scores.is_empty() {
        return Err(MimicError::EmptyInput);
    }

    let mut samples = Vec::with_capacity(scores.len());
    let mut n_out_of_range = 0;
    for (index, (&score, &label)) in scores.iter().zip(labels.iter()).enumerate() {
        if !score.is_finite() {
            return Err(MimicError::NonFiniteScore(index));
        }
        let label = if label == 1.0 {
            true
        } else if label == 0.0 {
            false
        } else {
            return Err(MimicError::InvalidLabel(index, label));
        };
        if !(0.0..=1.0).contains(&score) {
            n_out_of_range += 1;
        }
        samples.push(Sample { score, label, index });
    }

    if n_out_of_range > 0 {
        warn!(
            "{} of {} scores lie outside [0, 1], only their order is used.",
            n_out_of_range,
            samples.len()
        );
    }

    samples.sort_unstable_by(compare_samples);

    let sorted_scores: Vec<f64> = samples.iter().map(|s| s.score).collect();
    let n_unique = count_unique_sorted(&sorted_scores);
    if n_unique < MIN_UNIQUE_SCORES {
        warn!(
            "Only {} distinct score(s) in the fit data, the calibration curve will be degenerate.",
            n_unique
        );
    }

    Ok(samples)
}

fn compare_samples(a: &Sample, b: &Sample) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then(a.label.cmp(&b.label))
        .then(a.index.cmp(&b.index))
}
