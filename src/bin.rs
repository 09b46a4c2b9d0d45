//! Bin
//!
//! This module defines the `Bin` struct, the unit of aggregation of the calibration.
//! A bin covers a contiguous run of score-sorted samples and keeps their counts
//! and score statistics.
use crate::data::Sample;
use serde::{Deserialize, Serialize};

/// Struct to hold the information of a given bin.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Index of the first sample of the bin in the sorted sample sequence.
    pub start: usize,
    /// Total number of samples.
    pub count: usize,
    /// Number of positive samples.
    pub n_pos: usize,
    /// Number of negative samples.
    pub n_neg: usize,
    /// Fraction of positives, `n_pos / count`.
    pub pos_rate: f64,
    /// Smallest raw score in the bin.
    pub min_prob: f64,
    /// Largest raw score in the bin.
    pub max_prob: f64,
    /// Mean raw score of the bin.
    pub avg_prob: f64,
}

impl Bin {
    /// Create a bin from a non-empty run of sorted samples.
    ///
    /// * `start` - Position of `samples[0]` in the full sorted sequence.
    /// * `samples` - The samples covered by the bin, ascending by score.
    pub fn from_samples(start: usize, samples: &[Sample]) -> Self {
        let count = samples.len();
        let n_pos = samples.iter().filter(|s| s.label).count();
        // Each term is scaled first so large scores cannot overflow the sum.
        let avg_prob: f64 = samples.iter().map(|s| s.score / count as f64).sum();
        let (min_prob, max_prob) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.score), hi.max(s.score))
            });
        Bin {
            start,
            count,
            n_pos,
            n_neg: count - n_pos,
            pos_rate: n_pos as f64 / count as f64,
            min_prob,
            max_prob,
            avg_prob,
        }
    }

    /// Combine this bin with the bin immediately to its right.
    ///
    /// Counts are summed, the score range is the union of both ranges and the
    /// mean is weighted by count, so the result matches a bin built directly
    /// from the union of samples.
    pub fn merge(&self, right: &Bin) -> Bin {
        let count = self.count + right.count;
        let n_pos = self.n_pos + right.n_pos;
        let avg_prob = self.avg_prob * (self.count as f64 / count as f64)
            + right.avg_prob * (right.count as f64 / count as f64);
        Bin {
            start: self.start.min(right.start),
            count,
            n_pos,
            n_neg: self.n_neg + right.n_neg,
            pos_rate: n_pos as f64 / count as f64,
            min_prob: self.min_prob.min(right.min_prob),
            max_prob: self.max_prob.max(right.max_prob),
            avg_prob,
        }
    }

    /// Whether this bin has a strictly higher positive rate than `other`.
    ///
    /// Compares `n_pos / count` by cross-multiplication so equal rates are never
    /// reported as a violation because of rounding.
    pub fn rate_exceeds(&self, other: &Bin) -> bool {
        (self.n_pos as u128) * (other.count as u128) > (other.n_pos as u128) * (self.count as u128)
    }

    /// Index one past the last sample of the bin.
    pub fn end(&self) -> usize {
        self.start + self.count
    }
}
