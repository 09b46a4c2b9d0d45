use crate::boundary::BoundaryChoice;
use crate::calibrator::config::CalibratorConfig;
use crate::MimicCalibrator;

impl MimicCalibrator {
    // Set methods for parameters

    /// Set the whole configuration on the calibrator.
    /// * `cfg` - The configuration to fit with.
    pub fn set_config(mut self, cfg: CalibratorConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the threshold_pos on the calibrator.
    /// * `threshold_pos` - Number of positives in each initial bin. Smaller values give
    ///   more, noisier bins before merging, larger values give a coarser curve.
    pub fn set_threshold_pos(mut self, threshold_pos: usize) -> Self {
        self.cfg.threshold_pos = threshold_pos;
        self
    }

    /// Set the record_history on the calibrator.
    /// * `record_history` - Keep a snapshot of the bins after every merge.
    pub fn set_record_history(mut self, record_history: bool) -> Self {
        self.cfg.record_history = record_history;
        self
    }

    /// Set the boundary_choice on the calibrator.
    /// * `boundary_choice` - Bin statistic used as the x coordinate of each control point.
    pub fn set_boundary_choice(mut self, boundary_choice: BoundaryChoice) -> Self {
        self.cfg.boundary_choice = boundary_choice;
        self
    }
}
