use crate::bin::Bin;
use crate::data::Sample;
use crate::errors::MimicError;
use crate::utils::validate_positive_int_parameter;

// The initial binning walks the score-sorted samples once and cuts a bin
// every time `threshold_pos` positives have been collected. Every bin but
// the last therefore holds exactly `threshold_pos` positives. The trailing
// bin keeps whatever is left, possibly fewer positives, possibly none.
// If the final sample closes a bin exactly, no empty bin is added.
// For the labels [0, 1, 0, 1, 1, 0, 0] and a threshold of 2 the cuts are
// [0, 1, 0, 1] [1, 0, 0].

/// Group sorted samples into the initial bins.
///
/// * `samples` - Non-empty samples, ascending by score.
/// * `threshold_pos` - Number of positives each bin is closed at.
pub fn initial_bins(samples: &[Sample], threshold_pos: usize) -> Result<Vec<Bin>, MimicError> {
    validate_positive_int_parameter(threshold_pos, "threshold_pos")?;
    if samples.is_empty() {
        return Err(MimicError::EmptyInput);
    }

    let mut bins = Vec::new();
    let mut start = 0;
    let mut n_pos = 0;
    for (i, sample) in samples.iter().enumerate() {
        if sample.label {
            n_pos += 1;
        }
        if n_pos == threshold_pos {
            bins.push(Bin::from_samples(start, &samples[start..=i]));
            start = i + 1;
            n_pos = 0;
        }
    }
    if start < samples.len() {
        bins.push(Bin::from_samples(start, &samples[start..]));
    }
    Ok(bins)
}
