//! Merge History
//!
//! Optional record of every intermediate binning produced while merging,
//! kept for diagnostics. Prediction never reads it.
use crate::bin::Bin;
use crate::errors::MimicError;
use serde::{Deserialize, Serialize};

/// Append-only log of bin sequences.
///
/// Snapshot 0 is the initial binning, snapshot `k` is the full bin sequence
/// right after the `k`-th merge.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MergeHistory {
    snapshots: Vec<Vec<Bin>>,
}

impl MergeHistory {
    /// Start a history from the initial binning.
    pub fn new(initial: Vec<Bin>) -> Self {
        MergeHistory {
            snapshots: vec![initial],
        }
    }

    /// Record the bin sequence after one merge.
    pub fn push(&mut self, snapshot: Vec<Bin>) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Vec<Bin>] {
        &self.snapshots
    }

    pub fn get(&self, step: usize) -> Option<&[Bin]> {
        self.snapshots.get(step).map(|s| s.as_slice())
    }

    /// The `(avg_prob, pos_rate)` series of the requested snapshots.
    ///
    /// * `steps` - Snapshot indices, an empty slice selects every snapshot.
    pub fn curves(&self, steps: &[usize]) -> Result<Vec<HistoryCurve>, MimicError> {
        select_curves(&self.snapshots, steps)
    }
}

/// Mean score and positive rate of every bin of one snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryCurve {
    /// Index of the snapshot the curve was taken from.
    pub step: usize,
    pub avg_prob: Vec<f64>,
    pub pos_rate: Vec<f64>,
}

impl HistoryCurve {
    pub fn from_bins(step: usize, bins: &[Bin]) -> Self {
        let (avg_prob, pos_rate) = bins.iter().map(|b| (b.avg_prob, b.pos_rate)).unzip();
        HistoryCurve {
            step,
            avg_prob,
            pos_rate,
        }
    }
}

pub(crate) fn select_curves(snapshots: &[Vec<Bin>], steps: &[usize]) -> Result<Vec<HistoryCurve>, MimicError> {
    if steps.is_empty() {
        return Ok(snapshots
            .iter()
            .enumerate()
            .map(|(step, bins)| HistoryCurve::from_bins(step, bins))
            .collect());
    }
    steps
        .iter()
        .map(|&step| {
            snapshots
                .get(step)
                .map(|bins| HistoryCurve::from_bins(step, bins))
                .ok_or(MimicError::HistoryIndex(step, snapshots.len()))
        })
        .collect()
}
