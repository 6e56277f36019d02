//! MACD — Moving Average Convergence/Divergence (12, 26, 9 EMA).
//!
//! Line:      EMA(close, fast) - EMA(close, slow)
//! Signal:    EMA(line, signal_period), seeded from the line's first valid value
//! Histogram: line - signal
//!
//! Three output lines, one `Indicator` instance per line.
//! Lookback: slow - 1 for the line, slow + signal - 2 for signal/histogram.

use crate::domain::PriceBar;
use crate::indicators::ema::ema_of_series;
use crate::indicators::Indicator;

/// Which line of the MACD triple to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdLine {
    Line,
    Signal,
    Histogram,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal_period: usize,
    line: MacdLine,
    name: String,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal_period: usize, line: MacdLine) -> Self {
        assert!(fast >= 1 && slow > fast, "MACD requires slow > fast >= 1");
        assert!(signal_period >= 1, "MACD signal period must be >= 1");
        let tag = match line {
            MacdLine::Line => "line",
            MacdLine::Signal => "signal",
            MacdLine::Histogram => "hist",
        };
        Self {
            fast,
            slow,
            signal_period,
            line,
            name: format!("macd_{tag}_{fast}_{slow}_{signal_period}"),
        }
    }

    pub fn line(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdLine::Line)
    }

    pub fn signal(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdLine::Signal)
    }

    pub fn histogram(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdLine::Histogram)
    }

    fn macd_line(&self, closes: &[f64]) -> Vec<f64> {
        let fast_ema = ema_of_series(closes, self.fast);
        let slow_ema = ema_of_series(closes, self.slow);
        fast_ema
            .iter()
            .zip(&slow_ema)
            .map(|(f, s)| f - s)
            .collect()
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        match self.line {
            MacdLine::Line => self.slow - 1,
            MacdLine::Signal | MacdLine::Histogram => self.slow + self.signal_period - 2,
        }
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let line = self.macd_line(&closes);
        match self.line {
            MacdLine::Line => line,
            MacdLine::Signal => ema_of_series(&line, self.signal_period),
            MacdLine::Histogram => {
                let signal = ema_of_series(&line, self.signal_period);
                line.iter().zip(&signal).map(|(l, s)| l - s).collect()
            }
        }
    }
}
