//! Stochastic KDJ (fastk 9, slowing 3/3, J = 3K - 2D).
//!
//! RSV[t] = (close - lowest_low_9) / (highest_high_9 - lowest_low_9) * 100
//! K = SMA(RSV, 3), D = SMA(K, 3), J = 3K - 2D.
//! A flat 9-bar range (highest == lowest) makes RSV undefined -> NaN.
//!
//! Three output lines, one `Indicator` instance per line.

use crate::domain::PriceBar;
use crate::indicators::sma::rolling_mean;
use crate::indicators::Indicator;

/// Which line of the KDJ triple to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StochasticLine {
    K,
    D,
    J,
}

#[derive(Debug, Clone)]
pub struct Stochastic {
    fastk_period: usize,
    smooth_k: usize,
    smooth_d: usize,
    line: StochasticLine,
    name: String,
}

impl Stochastic {
    pub fn new(fastk_period: usize, smooth_k: usize, smooth_d: usize, line: StochasticLine) -> Self {
        assert!(fastk_period >= 1, "fastk period must be >= 1");
        assert!(smooth_k >= 1 && smooth_d >= 1, "smoothing periods must be >= 1");
        let tag = match line {
            StochasticLine::K => "k",
            StochasticLine::D => "d",
            StochasticLine::J => "j",
        };
        Self {
            fastk_period,
            smooth_k,
            smooth_d,
            line,
            name: format!("stoch_{tag}_{fastk_period}_{smooth_k}_{smooth_d}"),
        }
    }

    pub fn k(fastk_period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        Self::new(fastk_period, smooth_k, smooth_d, StochasticLine::K)
    }

    pub fn d(fastk_period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        Self::new(fastk_period, smooth_k, smooth_d, StochasticLine::D)
    }

    pub fn j(fastk_period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        Self::new(fastk_period, smooth_k, smooth_d, StochasticLine::J)
    }

    fn rsv(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut rsv = vec![f64::NAN; n];

        if n < self.fastk_period {
            return rsv;
        }

        for i in (self.fastk_period - 1)..n {
            let window = &bars[(i + 1 - self.fastk_period)..=i];
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
            rsv[i] = (bars[i].close - ll) / (hh - ll) * 100.0;
        }

        rsv
    }
}

impl Indicator for Stochastic {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        let k = self.fastk_period + self.smooth_k - 2;
        match self.line {
            StochasticLine::K => k,
            StochasticLine::D | StochasticLine::J => k + self.smooth_d - 1,
        }
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let rsv = self.rsv(bars);
        let k = rolling_mean(&rsv, self.smooth_k);
        match self.line {
            StochasticLine::K => k,
            StochasticLine::D => rolling_mean(&k, self.smooth_d),
            StochasticLine::J => {
                let d = rolling_mean(&k, self.smooth_d);
                k.iter().zip(&d).map(|(k, d)| 3.0 * k - 2.0 * d).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_bars};

    fn rising_bars(n: usize) -> Vec<PriceBar> {
        let data: Vec<(f64, f64, f64, f64)> = (0..n)
            .map(|i| {
                let base = 100.0 + i as f64;
                (base, base + 1.0, base - 1.0, base + 0.5)
            })
            .collect();
        make_ohlc_bars(&data)
    }

    #[test]
    fn k_high_when_closing_near_highs() {
        let bars = rising_bars(20);
        let k = Stochastic::k(9, 3, 3).compute(&bars);
        let last = k[19];
        assert!(last > 70.0, "K should be high in a steady uptrend, got {last}");
    }

    #[test]
    fn j_is_3k_minus_2d() {
        let bars = rising_bars(25);
        let k = Stochastic::k(9, 3, 3).compute(&bars);
        let d = Stochastic::d(9, 3, 3).compute(&bars);
        let j = Stochastic::j(9, 3, 3).compute(&bars);
        for i in 0..25 {
            if !j[i].is_nan() {
                assert_approx(j[i], 3.0 * k[i] - 2.0 * d[i], 1e-9);
            }
        }
    }

    #[test]
    fn warmup_lengths() {
        let bars = rising_bars(20);
        let k = Stochastic::k(9, 3, 3).compute(&bars);
        let d = Stochastic::d(9, 3, 3).compute(&bars);
        for i in 0..10 {
            assert!(k[i].is_nan());
        }
        assert!(!k[10].is_nan());
        for i in 0..12 {
            assert!(d[i].is_nan());
        }
        assert!(!d[12].is_nan());
    }

    #[test]
    fn flat_range_is_nan() {
        let data: Vec<(f64, f64, f64, f64)> = (0..12).map(|_| (100.0, 100.0, 100.0, 100.0)).collect();
        let bars = make_ohlc_bars(&data);
        let k = Stochastic::k(9, 3, 3).compute(&bars);
        assert!(k.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn lookbacks() {
        assert_eq!(Stochastic::k(9, 3, 3).lookback(), 10);
        assert_eq!(Stochastic::d(9, 3, 3).lookback(), 12);
        assert_eq!(Stochastic::j(9, 3, 3).lookback(), 12);
    }
}
