//! Rate of Change — percentage change of close over `period` bars.
//!
//! ROC[t] = (close[t] - close[t - period]) / close[t - period] * 100.
//! A zero reference close makes the ratio undefined -> NaN.

use crate::domain::PriceBar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
    name: String,
}

impl Roc {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ROC period must be >= 1");
        Self {
            period,
            name: format!("roc_{period}"),
        }
    }
}

impl Indicator for Roc {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        for i in self.period..n {
            let prev = bars[i - self.period].close;
            if prev == 0.0 {
                continue;
            }
            result[i] = (bars[i].close - prev) / prev * 100.0;
        }
        result
    }
}

/// ROC of a raw series, used by indicators that chain onto smoothed values.
pub(crate) fn roc_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    for i in period..values.len() {
        let prev = values[i - period];
        if prev == 0.0 || prev.is_nan() {
            continue;
        }
        result[i] = (values[i] - prev) / prev * 100.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn percentage_change() {
        let bars = make_bars(&[100.0, 102.0, 110.0, 99.0]);
        let result = Roc::new(2).compute(&bars);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 10.0, DEFAULT_EPSILON);
        assert_approx(result[3], -300.0 / 102.0, 1e-9); // (99-102)/102*100
    }

    #[test]
    fn zero_reference_is_nan() {
        let bars = make_bars(&[0.0, 5.0, 10.0]);
        let result = Roc::new(2).compute(&bars);
        assert!(result[2].is_nan());
    }

    #[test]
    fn series_helper_skips_nan_reference() {
        let values = [f64::NAN, f64::NAN, 100.0, 105.0, 110.0];
        let result = roc_of_series(&values, 1);
        assert!(result[2].is_nan());
        assert_approx(result[3], 5.0, DEFAULT_EPSILON);
        assert_approx(result[4], 500.0 / 105.0, 1e-9);
    }
}
