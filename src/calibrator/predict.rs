//! Prediction Methods
//!
//! Piecewise-linear interpolation of new scores over the calibrated bins.
use crate::bin::Bin;
use crate::boundary::BoundaryTable;
use crate::errors::MimicError;
use crate::utils::lerp;
use crate::MimicModel;
use rayon::prelude::*;
use std::borrow::Cow;

/// Knots of the calibration curve, strictly increasing in `x`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CalibrationCurve<'a> {
    x: Cow<'a, [f64]>,
    y: Cow<'a, [f64]>,
}

impl<'a> CalibrationCurve<'a> {
    /// Build the knots from the boundary table.
    ///
    /// A table with strictly increasing representative scores is used as is.
    /// Otherwise neighbouring points with the same score become a single knot
    /// carrying the mean of their values, weighted by the counts of `bins`.
    pub(crate) fn new(table: &'a BoundaryTable, bins: &[Bin]) -> Result<Self, MimicError> {
        if table.is_empty() {
            return Err(MimicError::NotFitted);
        }
        if table.calibrated_value.len() != table.len() {
            return Err(MimicError::InconsistentModel(table.calibrated_value.len(), table.len()));
        }
        if bins.len() != table.len() {
            return Err(MimicError::InconsistentModel(table.len(), bins.len()));
        }
        if table.representative_prob.windows(2).all(|w| w[0] < w[1]) {
            return Ok(CalibrationCurve {
                x: Cow::Borrowed(&table.representative_prob),
                y: Cow::Borrowed(&table.calibrated_value),
            });
        }

        let mut x: Vec<f64> = Vec::with_capacity(table.len());
        let mut y: Vec<f64> = Vec::with_capacity(table.len());
        let (mut pooled_sum, mut pooled_count) = (0.0, 0);
        for ((px, py), bin) in table.points().zip(bins) {
            if x.last() == Some(&px) {
                pooled_sum += py * bin.count as f64;
                pooled_count += bin.count;
                if let Some(last) = y.last_mut() {
                    *last = pooled_sum / pooled_count as f64;
                }
            } else {
                x.push(px);
                y.push(py);
                pooled_sum = py * bin.count as f64;
                pooled_count = bin.count;
            }
        }
        Ok(CalibrationCurve {
            x: Cow::Owned(x),
            y: Cow::Owned(y),
        })
    }

    /// Calibrate a single score, clamping outside the knot range.
    pub(crate) fn calibrate(&self, score: f64) -> f64 {
        if score.is_nan() {
            return f64::NAN;
        }
        let last = self.x.len() - 1;
        if score <= self.x[0] {
            return self.y[0];
        }
        if score >= self.x[last] {
            return self.y[last];
        }
        // x[i] <= score < x[i + 1], unless the knots themselves are not ordered.
        let i = match self.x.partition_point(|&x| x <= score).checked_sub(1) {
            Some(i) if i < last => i,
            _ => return self.y[0],
        };
        // Rounding must not carry the value past the segment ends.
        lerp(score, self.x[i], self.x[i + 1], self.y[i], self.y[i + 1])
            .max(self.y[i])
            .min(self.y[i + 1])
    }
}

impl MimicModel {
    /// Calibrate a batch of raw scores.
    ///
    /// # Arguments
    ///
    /// * `scores` - Raw probabilities from the binary classifier.
    /// * `parallel` - If `true`, scores are calibrated in parallel using Rayon.
    ///
    /// # Returns
    ///
    /// Calibrated probabilities, in the same order as `scores`. Scores below the
    /// first control point get its value, scores above the last get the last value.
    pub fn predict(&self, scores: &[f64], parallel: bool) -> Result<Vec<f64>, MimicError> {
        let curve = CalibrationCurve::new(&self.boundary_table, &self.calibrated_model)?;
        let calibrated = if parallel {
            scores.par_iter().map(|&s| curve.calibrate(s)).collect()
        } else {
            scores.iter().map(|&s| curve.calibrate(s)).collect()
        };
        Ok(calibrated)
    }

    /// Calibrate a single raw score.
    pub fn predict_one(&self, score: f64) -> Result<f64, MimicError> {
        let curve = CalibrationCurve::new(&self.boundary_table, &self.calibrated_model)?;
        Ok(curve.calibrate(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryChoice;

    fn bin(avg_prob: f64, count: usize, n_pos: usize) -> Bin {
        Bin {
            start: 0,
            count,
            n_pos,
            n_neg: count - n_pos,
            pos_rate: n_pos as f64 / count as f64,
            min_prob: avg_prob,
            max_prob: avg_prob,
            avg_prob,
        }
    }

    fn model(bins: Vec<Bin>) -> MimicModel {
        MimicModel {
            boundary_table: BoundaryTable::from_bins(&bins, BoundaryChoice::Mean),
            calibrated_model: bins,
            ..Default::default()
        }
    }

    #[test]
    fn test_curve_interpolation() {
        let bins = vec![bin(0.25, 10, 2), bin(0.5, 10, 4), bin(0.75, 4, 4)];
        let table = BoundaryTable::from_bins(&bins, BoundaryChoice::Mean);
        let curve = CalibrationCurve::new(&table, &bins).unwrap();
        assert!(matches!(curve.x, Cow::Borrowed(_)));
        // Knots are hit exactly.
        assert_eq!(curve.calibrate(0.25), 0.2);
        assert_eq!(curve.calibrate(0.5), 0.4);
        assert_eq!(curve.calibrate(0.75), 1.0);
        // Clamped outside.
        assert_eq!(curve.calibrate(0.0), 0.2);
        assert_eq!(curve.calibrate(-3.0), 0.2);
        assert_eq!(curve.calibrate(f64::NEG_INFINITY), 0.2);
        assert_eq!(curve.calibrate(1.0), 1.0);
        assert_eq!(curve.calibrate(7.0), 1.0);
        assert_eq!(curve.calibrate(f64::INFINITY), 1.0);
        // Between knots.
        assert!((curve.calibrate(0.375) - 0.3).abs() < 1e-12);
        assert!((curve.calibrate(0.625) - 0.7).abs() < 1e-12);
        assert!(curve.calibrate(f64::NAN).is_nan());
    }

    #[test]
    fn test_curve_duplicate_knots() {
        let bins = vec![bin(0.2, 10, 1), bin(0.5, 10, 3), bin(0.5, 10, 5), bin(0.8, 10, 9)];
        let table = BoundaryTable::from_bins(&bins, BoundaryChoice::Mean);
        let curve = CalibrationCurve::new(&table, &bins).unwrap();
        assert_eq!(curve.x.as_ref(), &[0.2, 0.5, 0.8]);
        assert_eq!(curve.y.len(), 3);
        assert!((curve.y[1] - 0.4).abs() < 1e-12);
        assert!((curve.calibrate(0.5) - 0.4).abs() < 1e-12);
        let v = curve.calibrate(0.65);
        assert!(v.is_finite());
        assert!((v - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_curve_single_knot() {
        let bins = vec![bin(0.4, 7, 3)];
        let table = BoundaryTable::from_bins(&bins, BoundaryChoice::Mean);
        let curve = CalibrationCurve::new(&table, &bins).unwrap();
        assert_eq!(curve.calibrate(0.0), 3.0 / 7.0);
        assert_eq!(curve.calibrate(0.4), 3.0 / 7.0);
        assert_eq!(curve.calibrate(0.9), 3.0 / 7.0);
    }

    #[test]
    fn test_curve_unordered_knots_do_not_panic() {
        let bins = vec![bin(0.4, 7, 3)];
        let table = BoundaryTable {
            representative_prob: vec![f64::NAN],
            calibrated_value: vec![0.25],
        };
        let curve = CalibrationCurve::new(&table, &bins).unwrap();
        assert_eq!(curve.calibrate(0.5), 0.25);

        let bins = vec![bin(0.2, 5, 1), bin(0.6, 5, 4)];
        let table = BoundaryTable {
            representative_prob: vec![0.2, f64::NAN],
            calibrated_value: vec![0.2, 0.8],
        };
        let curve = CalibrationCurve::new(&table, &bins).unwrap();
        assert_eq!(curve.calibrate(0.1), 0.2);
        assert_eq!(curve.calibrate(0.5), 0.2);
    }

    #[test]
    fn test_curve_errors() {
        let empty = BoundaryTable::default();
        assert_eq!(CalibrationCurve::new(&empty, &[]), Err(MimicError::NotFitted));

        let bins = vec![bin(0.2, 5, 1), bin(0.6, 5, 4)];
        let table = BoundaryTable::from_bins(&bins[..1], BoundaryChoice::Mean);
        assert_eq!(
            CalibrationCurve::new(&table, &bins),
            Err(MimicError::InconsistentModel(1, 2))
        );
        let ragged = BoundaryTable {
            representative_prob: vec![0.2, 0.6],
            calibrated_value: vec![0.2],
        };
        assert_eq!(
            CalibrationCurve::new(&ragged, &bins),
            Err(MimicError::InconsistentModel(1, 2))
        );
    }

    #[test]
    fn test_predict_follows_boundary_table() {
        let mut model = model(vec![bin(0.2, 10, 1), bin(0.8, 10, 9)]);
        assert!((model.predict_one(0.5).unwrap() - 0.5).abs() < 1e-12);
        model.boundary_table.calibrated_value = vec![0.3, 0.7];
        assert_eq!(model.predict_one(0.2).unwrap(), 0.3);
        assert_eq!(model.predict(&[0.0, 0.8, 1.0], false).unwrap(), vec![0.3, 0.7, 0.7]);

        model.calibrated_model.pop();
        assert_eq!(model.predict_one(0.5), Err(MimicError::InconsistentModel(2, 1)));
    }

    #[test]
    fn test_unfitted_model() {
        let model = MimicModel::default();
        assert!(!model.is_fitted());
        assert_eq!(model.predict(&[0.5], false), Err(MimicError::NotFitted));
        assert_eq!(model.predict_one(0.5), Err(MimicError::NotFitted));
    }
}
