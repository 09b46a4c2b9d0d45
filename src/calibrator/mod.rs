// public modules
pub mod config;
pub mod core;
pub mod model;
pub mod predict;

// private modules
mod setters;

use self::core::MimicCalibrator;
use self::model::MimicModel;
use crate::errors::MimicError;

/// Fit a calibration with the default configuration.
///
/// * `scores` - Raw probabilities from the binary classifier.
/// * `labels` - Binary targets, each `0.0` or `1.0`.
pub fn fit(scores: &[f64], labels: &[f64]) -> Result<MimicModel, MimicError> {
    MimicCalibrator::default().fit(scores, labels)
}

/// Calibrate scores with a fitted model, sequentially.
pub fn predict(model: &MimicModel, scores: &[f64]) -> Result<Vec<f64>, MimicError> {
    model.predict(scores, false)
}
