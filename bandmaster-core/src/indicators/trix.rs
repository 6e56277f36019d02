//! TRIX — 1-bar rate of change of a triple-smoothed EMA.
//!
//! TRIX[t] = (E3[t] - E3[t-1]) / E3[t-1] * 100, where E3 is a thrice-applied
//! EMA of close. Lookback: 3 * (period - 1) + 1.

use crate::domain::PriceBar;
use crate::indicators::ema::ema_of_series;
use crate::indicators::roc::roc_of_series;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Trix {
    period: usize,
    name: String,
}

impl Trix {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "TRIX period must be >= 1");
        Self {
            period,
            name: format!("trix_{period}"),
        }
    }
}

impl Indicator for Trix {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        3 * (self.period - 1) + 1
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let e1 = ema_of_series(&closes, self.period);
        let e2 = ema_of_series(&e1, self.period);
        let e3 = ema_of_series(&e2, self.period);
        roc_of_series(&e3, 1)
    }
}
