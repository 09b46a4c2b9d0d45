//! Boundary Table
//!
//! The reduced view of a calibrated model: one `(representative_prob, calibrated_value)`
//! control point per bin, used as the knots of the calibration curve.
use crate::bin::Bin;
use crate::errors::MimicError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which score statistic of a bin represents it on the x axis.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BoundaryChoice {
    /// Left edge of the bin, its smallest score.
    Min,
    /// Right edge of the bin, its largest score.
    Max,
    /// Mean score of the bin.
    #[default]
    Mean,
}

impl BoundaryChoice {
    pub fn representative(&self, bin: &Bin) -> f64 {
        match self {
            BoundaryChoice::Min => bin.min_prob,
            BoundaryChoice::Max => bin.max_prob,
            BoundaryChoice::Mean => bin.avg_prob,
        }
    }
}

impl FromStr for BoundaryChoice {
    type Err = MimicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Min" => Ok(BoundaryChoice::Min),
            "Max" => Ok(BoundaryChoice::Max),
            "Mean" => Ok(BoundaryChoice::Mean),
            _ => Err(MimicError::ParseString(
                s.to_string(),
                "BoundaryChoice".to_string(),
                items_to_strings(vec!["Min", "Max", "Mean"]),
            )),
        }
    }
}

/// Ordered control points of the calibration curve.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BoundaryTable {
    /// Representative raw score of each bin, non-decreasing.
    pub representative_prob: Vec<f64>,
    /// Positive rate of each bin, non-decreasing.
    pub calibrated_value: Vec<f64>,
}

impl BoundaryTable {
    /// Build the table from a monotone bin sequence, one point per bin, in bin order.
    pub fn from_bins(bins: &[Bin], choice: BoundaryChoice) -> Self {
        let (representative_prob, calibrated_value) =
            bins.iter().map(|b| (choice.representative(b), b.pos_rate)).unzip();
        BoundaryTable {
            representative_prob,
            calibrated_value,
        }
    }

    pub fn len(&self) -> usize {
        self.representative_prob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representative_prob.is_empty()
    }

    /// Iterate over `(representative_prob, calibrated_value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.representative_prob
            .iter()
            .copied()
            .zip(self.calibrated_value.iter().copied())
    }
}
