//! Errors
//!
//! Custom error types used throughout the `mimic` crate.
use thiserror::Error;

/// Errors that can occur while fitting or applying a mimic calibration.
#[derive(Debug, Error, PartialEq)]
pub enum MimicError {
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// No samples were provided.
    #[error("At least one sample is required to fit a calibration.")]
    EmptyInput,
    /// Scores and labels have different lengths.
    #[error("Scores and labels must have the same length, got {0} scores and {1} labels.")]
    LengthMismatch(usize, usize),
    /// A label other than 0 or 1 was found.
    #[error("Label at index {0} is {1}, labels must be 0 or 1.")]
    InvalidLabel(usize, f64),
    /// A NaN or infinite score was found in the fit data.
    #[error("Score at index {0} is not finite.")]
    NonFiniteScore(usize),
    /// The boundary table and the bins of a model disagree.
    #[error("The boundary table and bins of the model disagree in length: {0} against {1}.")]
    InconsistentModel(usize, usize),
    /// The model has no bins.
    #[error("The calibration model has not been fit.")]
    NotFitted,
    /// A merge history snapshot was requested that does not exist.
    #[error("History index {0} is out of range, {1} snapshots were recorded.")]
    HistoryIndex(usize, usize),
    /// Unable to write to file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read from file.
    #[error("Unable to read from file: {0}")]
    UnableToRead(String),
}
