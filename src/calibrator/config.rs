//! Calibrator Configuration
//!
//! Defines the configuration of the mimic calibrator and how it is read from
//! and written to JSON.
use crate::boundary::BoundaryChoice;
use crate::constants::DEFAULT_THRESHOLD_POS;
use crate::errors::MimicError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_threshold_pos() -> usize {
    DEFAULT_THRESHOLD_POS
}
fn default_record_history() -> bool {
    false
}
fn default_boundary_choice() -> BoundaryChoice {
    BoundaryChoice::Mean
}

/// Configuration for the `MimicCalibrator`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibratorConfig {
    /// Number of positives each initial bin is closed at.
    #[serde(default = "default_threshold_pos")]
    pub threshold_pos: usize,
    /// Whether to keep every intermediate binning produced while merging.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
    /// Bin statistic used as the x coordinate of the control points.
    #[serde(default = "default_boundary_choice")]
    pub boundary_choice: BoundaryChoice,
}

impl Default for CalibratorConfig {
    fn default() -> Self {
        CalibratorConfig {
            threshold_pos: DEFAULT_THRESHOLD_POS,
            record_history: false,
            boundary_choice: BoundaryChoice::Mean,
        }
    }
}

/// IO
pub trait CalibratorIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), MimicError> {
        fs::write(path, self.json_dump()?).map_err(|e| MimicError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, MimicError> {
        serde_json::to_string(self).map_err(|e| MimicError::UnableToWrite(e.to_string()))
    }

    /// Load from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, MimicError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| MimicError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, MimicError> {
        let json_str = fs::read_to_string(path).map_err(|e| MimicError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl CalibratorIO for CalibratorConfig {}
