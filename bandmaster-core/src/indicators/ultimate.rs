//! Ultimate Oscillator (7, 14, 28).
//!
//! Buying pressure BP = close - min(low, prev_close).
//! True range      TR = max(high, prev_close) - min(low, prev_close).
//! UO = 100 * (4 * avg7 + 2 * avg14 + avg28) / 7, where each avg is
//! sum(BP, p) / sum(TR, p). Bounded in [0, 100]; a zero TR sum -> NaN.

use crate::domain::PriceBar;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct UltimateOscillator {
    short: usize,
    medium: usize,
    long: usize,
    name: String,
}

impl UltimateOscillator {
    pub fn new(short: usize, medium: usize, long: usize) -> Self {
        assert!(
            short >= 1 && medium > short && long > medium,
            "Ultimate Oscillator requires long > medium > short >= 1"
        );
        Self {
            short,
            medium,
            long,
            name: format!("ultosc_{short}_{medium}_{long}"),
        }
    }

    fn windowed_ratio(bp: &[f64], tr: &[f64], period: usize, i: usize) -> Option<f64> {
        if i + 1 < period + 1 {
            return None;
        }
        let lo = i + 1 - period;
        let bp_sum: f64 = bp[lo..=i].iter().sum();
        let tr_sum: f64 = tr[lo..=i].iter().sum();
        if tr_sum == 0.0 || bp_sum.is_nan() || tr_sum.is_nan() {
            return None;
        }
        Some(bp_sum / tr_sum)
    }
}

impl Indicator for UltimateOscillator {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.long
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        if n < 2 {
            return result;
        }

        let mut bp = vec![f64::NAN; n];
        let mut tr = vec![f64::NAN; n];
        for i in 1..n {
            let prev_close = bars[i - 1].close;
            let true_low = bars[i].low.min(prev_close);
            let true_high = bars[i].high.max(prev_close);
            bp[i] = bars[i].close - true_low;
            tr[i] = true_high - true_low;
        }

        for i in self.long..n {
            let (Some(a), Some(b), Some(c)) = (
                Self::windowed_ratio(&bp, &tr, self.short, i),
                Self::windowed_ratio(&bp, &tr, self.medium, i),
                Self::windowed_ratio(&bp, &tr, self.long, i),
            ) else {
                continue;
            };
            result[i] = 100.0 * (4.0 * a + 2.0 * b + c) / 7.0;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_ohlc_bars;

    fn trending(n: usize, step: f64) -> Vec<PriceBar> {
        let data: Vec<(f64, f64, f64, f64)> = (0..n)
            .map(|i| {
                let base = 100.0 + step * i as f64;
                (base, base + 1.0, base - 1.0, base + 0.8 * step.signum())
            })
            .collect();
        make_ohlc_bars(&data)
    }

    #[test]
    fn high_in_uptrend_low_in_downtrend() {
        let up = UltimateOscillator::new(7, 14, 28).compute(&trending(40, 1.0));
        let down = UltimateOscillator::new(7, 14, 28).compute(&trending(40, -1.0));
        assert!(up[39] > 60.0, "uptrend UO was {}", up[39]);
        assert!(down[39] < 40.0, "downtrend UO was {}", down[39]);
    }

    #[test]
    fn bounded_and_warmup() {
        let bars = trending(45, 0.5);
        let ind = UltimateOscillator::new(7, 14, 28);
        let result = ind.compute(&bars);
        for v in result.iter().take(28) {
            assert!(v.is_nan());
        }
        for v in result.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn flat_market_is_nan() {
        let bars = make_ohlc_bars(&[(100.0, 100.0, 100.0, 100.0); 35]);
        let result = UltimateOscillator::new(7, 14, 28).compute(&bars);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
