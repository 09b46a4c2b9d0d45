//! Merge
//!
//! Pool adjacent bins until the positive rate is non-decreasing.
use crate::bin::Bin;
use crate::history::MergeHistory;
use log::debug;

/// Result of merging an initial binning.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Bins with non-decreasing positive rate.
    pub bins: Vec<Bin>,
    /// Number of pairwise merges performed.
    pub n_merges: usize,
    /// Every intermediate binning, when recording was requested.
    pub history: Option<MergeHistory>,
}

/// Merge adjacent bins that violate monotonicity until none are left.
///
/// Bins are taken from left to right onto a stack that is always monotone.
/// When the incoming bin has a lower positive rate than the top of the stack,
/// the two are merged and the merged block is compared again against its new
/// left neighbour. The leftmost violation is therefore always resolved first,
/// and each merge removes one bin, so at most `bins.len() - 1` merges happen.
///
/// * `initial` - The initial binning, ascending by score.
/// * `record_history` - Whether to keep a snapshot after every merge.
pub fn merge_bins(initial: Vec<Bin>, record_history: bool) -> MergeOutcome {
    let mut history = if record_history {
        Some(MergeHistory::new(initial.clone()))
    } else {
        None
    };

    let mut stack: Vec<Bin> = Vec::with_capacity(initial.len());
    let mut n_merges = 0;
    for (j, bin) in initial.iter().enumerate() {
        let mut current = *bin;
        while let Some(prev) = stack.last() {
            if !prev.rate_exceeds(&current) {
                break;
            }
            debug!(
                "Merging bins at samples {}..{} (rate {:.4}) and {}..{} (rate {:.4}).",
                prev.start,
                prev.end(),
                prev.pos_rate,
                current.start,
                current.end(),
                current.pos_rate
            );
            current = prev.merge(&current);
            stack.pop();
            n_merges += 1;

            if let Some(history) = history.as_mut() {
                let mut snapshot = Vec::with_capacity(stack.len() + initial.len() - j);
                snapshot.extend_from_slice(&stack);
                snapshot.push(current);
                snapshot.extend_from_slice(&initial[j + 1..]);
                history.push(snapshot);
            }
        }
        stack.push(current);
    }

    MergeOutcome {
        bins: stack,
        n_merges,
        history,
    }
}

/// Whether the positive rate never decreases across `bins`.
pub fn is_monotone(bins: &[Bin]) -> bool {
    bins.windows(2).all(|w| !w[0].rate_exceeds(&w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::initial_bins;
    use crate::data::Sample;

    fn bins_from_labels(labels: &[u8], threshold_pos: usize) -> Vec<Bin> {
        let samples: Vec<Sample> = labels
            .iter()
            .enumerate()
            .map(|(i, &l)| Sample {
                score: (i + 1) as f64 / (labels.len() + 1) as f64,
                label: l == 1,
                index: i,
            })
            .collect();
        initial_bins(&samples, threshold_pos).unwrap()
    }

    fn bin(start: usize, count: usize, n_pos: usize) -> Bin {
        Bin {
            start,
            count,
            n_pos,
            n_neg: count - n_pos,
            pos_rate: n_pos as f64 / count as f64,
            min_prob: start as f64,
            max_prob: (start + count - 1) as f64,
            avg_prob: start as f64 + (count - 1) as f64 / 2.0,
        }
    }

    #[test]
    fn test_merge_restores_monotonicity() {
        let initial = bins_from_labels(&[0, 0, 0, 0, 1, 0, 1, 1, 1, 1], 2);
        // [0 0 0 0 1 0 1] [1 1] [1]
        assert_eq!(initial.len(), 3);
        let outcome = merge_bins(initial, false);
        assert!(is_monotone(&outcome.bins));
        assert_eq!(outcome.n_merges, 0);
        assert!(outcome.history.is_none());
    }

    #[test]
    fn test_merge_cascades_left() {
        // rates 0.5, 0.6, 0.4, 0.1: merging the last pair must pull in the earlier bins too.
        let initial = vec![bin(0, 10, 5), bin(10, 10, 6), bin(20, 10, 4), bin(30, 10, 1)];
        let outcome = merge_bins(initial, false);
        assert_eq!(outcome.bins.len(), 1);
        assert_eq!(outcome.n_merges, 3);
        assert_eq!(outcome.bins[0].count, 40);
        assert_eq!(outcome.bins[0].n_pos, 16);
        assert_eq!(outcome.bins[0].start, 0);
    }

    #[test]
    fn test_merge_partial() {
        // rates 0.2, 0.5, 0.3, 0.9
        let initial = vec![bin(0, 10, 2), bin(10, 10, 5), bin(20, 10, 3), bin(30, 10, 9)];
        let outcome = merge_bins(initial, false);
        assert_eq!(outcome.n_merges, 1);
        let counts: Vec<usize> = outcome.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![10, 20, 10]);
        let rates: Vec<f64> = outcome.bins.iter().map(|b| b.pos_rate).collect();
        assert_eq!(rates, vec![0.2, 0.4, 0.9]);
    }

    #[test]
    fn test_merge_idempotent() {
        let initial = vec![bin(0, 10, 5), bin(10, 10, 6), bin(20, 10, 4), bin(30, 10, 1), bin(40, 5, 5)];
        let first = merge_bins(initial, false);
        let second = merge_bins(first.bins.clone(), false);
        assert_eq!(second.n_merges, 0);
        assert_eq!(second.bins, first.bins);
    }

    #[test]
    fn test_merge_equal_rates_kept() {
        let initial = vec![bin(0, 3, 1), bin(3, 6, 2), bin(9, 4, 4)];
        let outcome = merge_bins(initial, false);
        assert_eq!(outcome.n_merges, 0);
        assert_eq!(outcome.bins.len(), 3);
    }

    #[test]
    fn test_merge_history() {
        let initial = vec![bin(0, 10, 5), bin(10, 10, 6), bin(20, 10, 4), bin(30, 10, 9)];
        let outcome = merge_bins(initial.clone(), true);
        let history = outcome.history.unwrap();
        assert_eq!(history.len(), outcome.n_merges + 1);
        assert_eq!(history.get(0).unwrap(), initial.as_slice());
        assert_eq!(history.get(history.len() - 1).unwrap(), outcome.bins.as_slice());
        for (k, snapshot) in history.snapshots().iter().enumerate() {
            // Every snapshot is a full partition with one bin fewer than the previous one.
            assert_eq!(snapshot.len(), initial.len() - k);
            assert_eq!(snapshot.iter().map(|b| b.count).sum::<usize>(), 40);
            for w in snapshot.windows(2) {
                assert_eq!(w[0].end(), w[1].start);
            }
        }
    }
}
