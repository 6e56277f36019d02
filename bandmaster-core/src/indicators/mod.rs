//! Concrete indicator implementations.
//!
//! Every indicator is a pure function: bar history in, numeric series of
//! the same length out. Warmup values (fewer bars than the lookback
//! window) are `f64::NAN` — never fabricated, never an error. NaN in the
//! input propagates into any window that contains it.
//!
//! Multi-series indicators (MACD, Bollinger, KDJ, ±DI) are exposed as
//! separate named instances per output line, keeping the single-series
//! `Indicator` trait unchanged.

pub mod adosc;
pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod parabolic_sar;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod trix;
pub mod ultimate;
pub mod volume_ratio;
pub mod williams_r;

pub use adosc::AdOscillator;
pub use adx::{Adx, DiLine, DirectionalIndex};
pub use atr::Atr;
pub use bollinger::{Bollinger, BollingerBand};
pub use cci::Cci;
pub use ema::Ema;
pub use macd::{Macd, MacdLine};
pub use momentum::Momentum;
pub use parabolic_sar::ParabolicSar;
pub use roc::Roc;
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticLine};
pub use trix::Trix;
pub use ultimate::UltimateOscillator;
pub use volume_ratio::VolumeRatio;
pub use williams_r::WilliamsR;

use crate::domain::PriceBar;

/// Trait for indicators.
///
/// Indicators take a full bar series and produce a numeric output series
/// of the same length. The first `lookback()` values are `f64::NAN`
/// (warmup). No value at bar t may depend on data from bar t+1 or later.
pub trait Indicator {
    /// Human-readable name (e.g., "sma_20", "atr_14").
    fn name(&self) -> &str;

    /// Number of bars needed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64>;
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev close (or close for the first
/// bar), high = max(open, close) + 1.0, low = min(open, close) - 1.0,
/// volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Create bars from explicit (open, high, low, close) tuples, volume 1000.
#[cfg(test)]
pub fn make_ohlc_bars(data: &[(f64, f64, f64, f64)]) -> Vec<PriceBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| PriceBar {
            date: base_date + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000.0,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
