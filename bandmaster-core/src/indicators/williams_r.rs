//! Williams %R.
//!
//! %R[t] = (highest_high - close) / (highest_high - lowest_low) * -100
//! over a lookback window. Bounded in [-100, 0]; a flat window -> NaN.
//! Lookback: period - 1.

use crate::domain::PriceBar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct WilliamsR {
    period: usize,
    name: String,
}

impl WilliamsR {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "Williams %R period must be >= 1");
        Self {
            period,
            name: format!("willr_{period}"),
        }
    }
}

impl Indicator for WilliamsR {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        for i in (self.period - 1)..n {
            let window = &bars[(i + 1 - self.period)..=i];
            let mut hh = f64::NEG_INFINITY;
            let mut ll = f64::INFINITY;
            let mut has_nan = false;
            for b in window {
                if b.high.is_nan() || b.low.is_nan() {
                    has_nan = true;
                    break;
                }
                hh = hh.max(b.high);
                ll = ll.min(b.low);
            }
            if has_nan || bars[i].close.is_nan() || hh == ll {
                continue;
            }
            result[i] = (hh - bars[i].close) / (hh - ll) * -100.0;
        }

        result
    }
}
