use crate::binning::initial_bins;
use crate::boundary::BoundaryTable;
use crate::calibrator::config::CalibratorConfig;
use crate::data::sorted_samples;
use crate::errors::MimicError;
use crate::merge::{merge_bins, MergeOutcome};
use crate::utils::{fmt_vec_output, validate_positive_int_parameter};
use crate::MimicModel;
use log::{debug, info, warn};
use std::time::Instant;

/// Mimic calibrator.
///
/// Holds the configuration only, fitting returns a separate immutable [`MimicModel`],
/// so one calibrator can be fit on several datasets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MimicCalibrator {
    pub cfg: CalibratorConfig,
}

impl MimicCalibrator {
    /// Create a calibrator from a configuration.
    pub fn new(cfg: CalibratorConfig) -> Self {
        MimicCalibrator { cfg }
    }

    /// Fit a calibration model.
    ///
    /// # Arguments
    ///
    /// * `scores` - Raw probabilities from the binary classifier, in any order.
    /// * `labels` - Binary targets, each `0.0` or `1.0`, aligned with `scores`.
    ///
    /// # Errors
    ///
    /// A non-positive `threshold_pos`, empty input, mismatched lengths,
    /// non-binary labels and NaN scores are all rejected before any work is done.
    pub fn fit(&self, scores: &[f64], labels: &[f64]) -> Result<MimicModel, MimicError> {
        let start = Instant::now();
        validate_positive_int_parameter(self.cfg.threshold_pos, "threshold_pos")?;
        let samples = sorted_samples(scores, labels)?;

        let n_pos = samples.iter().filter(|s| s.label).count();
        if n_pos == 0 || n_pos == samples.len() {
            warn!(
                "All {} labels belong to the same class, the calibration is a single constant bin.",
                samples.len()
            );
        }

        let initial = initial_bins(&samples, self.cfg.threshold_pos)?;
        let n_initial = initial.len();
        let MergeOutcome {
            bins,
            n_merges,
            history,
        } = merge_bins(initial, self.cfg.record_history);
        let boundary_table = BoundaryTable::from_bins(&bins, self.cfg.boundary_choice);

        info!(
            "Fitted mimic calibration on {} samples ({} positives): {} initial bins, {} merges, {} final bins in {:.3}s.",
            samples.len(),
            n_pos,
            n_initial,
            n_merges,
            bins.len(),
            start.elapsed().as_secs_f32()
        );
        debug!("Calibrated values: {}", fmt_vec_output(&boundary_table.calibrated_value));

        Ok(MimicModel {
            cfg: self.cfg.clone(),
            calibrated_model: bins,
            boundary_table,
            merge_history: history,
            n_merges,
        })
    }
}
