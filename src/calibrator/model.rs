//! Fitted Model
//!
//! The immutable result of fitting a `MimicCalibrator`.
use crate::bin::Bin;
use crate::boundary::BoundaryTable;
use crate::calibrator::config::CalibratorConfig;
use crate::errors::MimicError;
use crate::history::{select_curves, HistoryCurve, MergeHistory};
use serde::{Deserialize, Serialize};

/// A fitted mimic calibration.
///
/// `Default` gives an unfitted model with no bins, predicting with it fails with
/// [`MimicError::NotFitted`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MimicModel {
    pub(crate) cfg: CalibratorConfig,
    pub(crate) calibrated_model: Vec<Bin>,
    pub(crate) boundary_table: BoundaryTable,
    pub(crate) merge_history: Option<MergeHistory>,
    pub(crate) n_merges: usize,
}

impl MimicModel {
    /// Configuration the model was fit with.
    pub fn config(&self) -> &CalibratorConfig {
        &self.cfg
    }

    /// Final bins, ascending by score with non-decreasing positive rate.
    pub fn calibrated_model(&self) -> &[Bin] {
        &self.calibrated_model
    }

    pub fn boundary_table(&self) -> &BoundaryTable {
        &self.boundary_table
    }

    /// Snapshots of the merge process, present only if `record_history` was set.
    pub fn merge_history(&self) -> Option<&MergeHistory> {
        self.merge_history.as_ref()
    }

    /// Number of pairwise merges performed during fit.
    pub fn n_merges(&self) -> usize {
        self.n_merges
    }

    pub fn is_fitted(&self) -> bool {
        !self.calibrated_model.is_empty()
    }

    /// Number of samples the model was fit on.
    pub fn n_samples(&self) -> usize {
        self.calibrated_model.iter().map(|b| b.count).sum()
    }

    /// `(avg_prob, pos_rate)` curves of the merge process.
    ///
    /// Without a recorded history the final binning is the only snapshot.
    ///
    /// * `steps` - Snapshot indices, an empty slice selects every snapshot.
    pub fn history_curves(&self, steps: &[usize]) -> Result<Vec<HistoryCurve>, MimicError> {
        match &self.merge_history {
            Some(history) => history.curves(steps),
            None => select_curves(std::slice::from_ref(&self.calibrated_model), steps),
        }
    }
}
