//! Mimic calibration of binary classifier probabilities.
//!
//! Raw scores are sorted and cut into bins holding a fixed number of positives,
//! adjacent bins are merged until the positive rate never decreases, and new
//! scores are mapped by linear interpolation between the bins. The result is a
//! continuous, monotone alternative to the step function of isotonic calibration.

mod utils;

// Modules
pub mod bin;
pub mod binning;
pub mod boundary;
pub mod calibrator;
pub mod constants;
pub mod data;
pub mod errors;
pub mod history;
pub mod merge;
pub mod metric;

// Individual classes, and functions
pub use bin::Bin;
pub use boundary::{BoundaryChoice, BoundaryTable};
pub use calibrator::config::{CalibratorConfig, CalibratorIO};
pub use calibrator::core::MimicCalibrator;
pub use calibrator::model::MimicModel;
pub use calibrator::{fit, predict};
pub use errors::MimicError;
pub use history::{HistoryCurve, MergeHistory};
