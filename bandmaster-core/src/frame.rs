//! Full indicator table computed over one bar history.
//!
//! `compute_indicators` runs every indicator the analysis layer consumes
//! and returns them as named columns alongside the bars. All columns have
//! the same length as the input; warmup entries are NaN.

use crate::domain::PriceBar;
use crate::error::AnalysisError;
use crate::indicators::{
    AdOscillator, Atr, Adx, Bollinger, Cci, DirectionalIndex, Ema, Indicator, Macd, Momentum,
    ParabolicSar, Roc, Rsi, Sma, Stochastic, Trix, UltimateOscillator, VolumeRatio, WilliamsR,
};
use crate::indicators::sma::rolling_mean;

/// Bars plus every derived indicator column, aligned by index.
#[derive(Debug, Clone)]
pub struct IndicatorFrame {
    pub bars: Vec<PriceBar>,

    pub ma5: Vec<f64>,
    pub ma10: Vec<f64>,
    pub ma20: Vec<f64>,
    pub ma60: Vec<f64>,
    pub ema20: Vec<f64>,
    pub ema60: Vec<f64>,

    pub bb_upper: Vec<f64>,
    pub bb_middle: Vec<f64>,
    pub bb_lower: Vec<f64>,

    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub macd_hist: Vec<f64>,

    pub rsi: Vec<f64>,
    pub adx: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
    pub atr: Vec<f64>,

    pub volume_ma5: Vec<f64>,
    pub volume_ratio: Vec<f64>,

    pub stoch_k: Vec<f64>,
    pub stoch_d: Vec<f64>,
    pub stoch_j: Vec<f64>,

    pub willr: Vec<f64>,
    pub cci: Vec<f64>,
    pub momentum: Vec<f64>,
    pub roc: Vec<f64>,
    pub adosc: Vec<f64>,
    pub sar: Vec<f64>,
    pub trix: Vec<f64>,
    pub ultosc: Vec<f64>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close of the most recent bar.
    pub fn latest_close(&self) -> f64 {
        self.bars.last().map(|b| b.close).unwrap_or(f64::NAN)
    }
}

/// Last element of a column, NaN when the column is empty.
pub(crate) fn last_value(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(f64::NAN)
}

/// Compute the full indicator table for a bar history.
///
/// Bars must be non-empty and strictly ascending by date. Short histories
/// are accepted; columns whose lookback exceeds the history stay NaN.
pub fn compute_indicators(bars: &[PriceBar]) -> Result<IndicatorFrame, AnalysisError> {
    if bars.is_empty() {
        return Err(AnalysisError::EmptyPriceSeries);
    }
    for pair in bars.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(AnalysisError::UnorderedPriceSeries);
        }
    }

    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    Ok(IndicatorFrame {
        bars: bars.to_vec(),

        ma5: Sma::new(5).compute(bars),
        ma10: Sma::new(10).compute(bars),
        ma20: Sma::new(20).compute(bars),
        ma60: Sma::new(60).compute(bars),
        ema20: Ema::new(20).compute(bars),
        ema60: Ema::new(60).compute(bars),

        bb_upper: Bollinger::upper(20, 2.0).compute(bars),
        bb_middle: Bollinger::middle(20, 2.0).compute(bars),
        bb_lower: Bollinger::lower(20, 2.0).compute(bars),

        macd: Macd::line(12, 26, 9).compute(bars),
        macd_signal: Macd::signal(12, 26, 9).compute(bars),
        macd_hist: Macd::histogram(12, 26, 9).compute(bars),

        rsi: Rsi::new(14).compute(bars),
        adx: Adx::new(14).compute(bars),
        plus_di: DirectionalIndex::plus(14).compute(bars),
        minus_di: DirectionalIndex::minus(14).compute(bars),
        atr: Atr::new(14).compute(bars),

        volume_ma5: rolling_mean(&volumes, 5),
        volume_ratio: VolumeRatio::new(5).compute(bars),

        stoch_k: Stochastic::k(9, 3, 3).compute(bars),
        stoch_d: Stochastic::d(9, 3, 3).compute(bars),
        stoch_j: Stochastic::j(9, 3, 3).compute(bars),

        willr: WilliamsR::new(14).compute(bars),
        cci: Cci::new(14).compute(bars),
        momentum: Momentum::new(10).compute(bars),
        roc: Roc::new(10).compute(bars),
        adosc: AdOscillator::new(3, 10).compute(bars),
        sar: ParabolicSar::default().compute(bars),
        trix: Trix::new(30).compute(bars),
        ultosc: UltimateOscillator::new(7, 14, 28).compute(bars),
    })
}
