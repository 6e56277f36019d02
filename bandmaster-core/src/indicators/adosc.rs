//! Chaikin A/D Oscillator.
//!
//! Money-flow multiplier MFM = ((close - low) - (high - close)) / (high - low),
//! zero on a flat bar. The A/D line accumulates MFM * volume; the oscillator
//! is EMA(AD, fast) - EMA(AD, slow), conventionally 3 and 10.

use crate::domain::PriceBar;
use crate::indicators::ema::ema_of_series;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct AdOscillator {
    fast: usize,
    slow: usize,
    name: String,
}

impl AdOscillator {
    pub fn new(fast: usize, slow: usize) -> Self {
        assert!(fast >= 1 && slow > fast, "A/D oscillator requires slow > fast >= 1");
        Self {
            fast,
            slow,
            name: format!("adosc_{fast}_{slow}"),
        }
    }

    fn ad_line(bars: &[PriceBar]) -> Vec<f64> {
        let mut ad = Vec::with_capacity(bars.len());
        let mut acc = 0.0;
        for b in bars {
            let range = b.high - b.low;
            let mfm = if range == 0.0 || range.is_nan() {
                0.0
            } else {
                ((b.close - b.low) - (b.high - b.close)) / range
            };
            acc += mfm * b.volume;
            ad.push(acc);
        }
        ad
    }
}

impl Indicator for AdOscillator {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.slow - 1
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let ad = Self::ad_line(bars);
        let fast = ema_of_series(&ad, self.fast);
        let slow = ema_of_series(&ad, self.slow);
        fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, high: f64, low: f64, close: f64, volume: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: (high + low) / 2.0,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn positive_under_accumulation() {
        // Closes pinned near the highs on steady volume: AD rises, fast EMA leads.
        let bars: Vec<PriceBar> = (1..=15)
            .map(|i| bar(i, 102.0 + i as f64, 98.0 + i as f64, 101.5 + i as f64, 10_000.0))
            .collect();
        let result = AdOscillator::new(3, 10).compute(&bars);
        for v in result.iter().take(9) {
            assert!(v.is_nan());
        }
        assert!(result[14] > 0.0);
    }

    #[test]
    fn negative_under_distribution() {
        let bars: Vec<PriceBar> = (1..=15)
            .map(|i| bar(i, 102.0 - i as f64 * 0.5, 98.0 - i as f64 * 0.5, 98.5 - i as f64 * 0.5, 10_000.0))
            .collect();
        let result = AdOscillator::new(3, 10).compute(&bars);
        assert!(result[14] < 0.0);
    }

    #[test]
    fn flat_bar_contributes_nothing() {
        let mut bars: Vec<PriceBar> = (1..=12)
            .map(|i| bar(i, 101.0, 99.0, 100.0, 10_000.0))
            .collect();
        bars[5] = bar(6, 100.0, 100.0, 100.0, 50_000.0);
        // MFM is 0 both for balanced bars and the flat one, so AD stays 0.
        let result = AdOscillator::new(3, 10).compute(&bars);
        assert!(result[11].abs() < 1e-9);
    }

    #[test]
    fn lookback() {
        assert_eq!(AdOscillator::new(3, 10).lookback(), 9);
    }
}
