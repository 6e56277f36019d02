//! Swing-band regime classification.
//!
//! Two questions answered per history: what kind of band is the stock in
//! (volatility regime), and where inside the trailing 20-bar range does
//! the latest close sit. Any rule whose inputs are NaN is skipped and the
//! chain falls through, ultimately to the standard band.

use serde::{Deserialize, Serialize};

use crate::frame::{last_value, IndicatorFrame};

const TRADING_DAYS_PER_YEAR: f64 = 252.0;
const POSITION_WINDOW: usize = 20;

/// Volatility/trend regime, matched in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandType {
    Micro,
    Trend,
    Short,
    Oscillating,
    Standard,
}

impl BandType {
    /// Expected holding horizon for the regime.
    pub fn period_range(&self) -> &'static str {
        match self {
            BandType::Micro => "15-30 minutes",
            BandType::Trend => "15-30 days",
            BandType::Short => "1-3 days",
            BandType::Oscillating => "3-7 days",
            BandType::Standard => "5-15 days",
        }
    }
}

/// Bucket of the close within the trailing 20-bar high/low range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPosition {
    Top,
    UpperMiddle,
    Middle,
    LowerMiddle,
    Bottom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandInfo {
    pub band_type: BandType,
    pub period_range: String,
    /// Annualized volatility (sample stdev of daily returns, sqrt-252
    /// scaled). NaN with fewer than three bars.
    pub volatility: f64,
    /// Latest ADX, 20.0 when still warming up.
    pub trend_strength: f64,
    pub position: BandPosition,
    pub position_description: String,
    pub guidance: String,
    /// Close within [low_20, high_20], as a clamped percentage.
    pub position_percent: f64,
    pub high_20: f64,
    pub low_20: f64,
}

/// Classify the band regime and range position for a computed frame.
pub fn classify_band(frame: &IndicatorFrame) -> BandInfo {
    let volatility = annualized_volatility(&frame.bars.iter().map(|b| b.close).collect::<Vec<_>>());
    let adx = last_value(&frame.adx);
    let trend_strength = if adx.is_nan() { 20.0 } else { adx };

    let (position, position_percent, high_20, low_20) = band_position(frame);
    let position_description = describe_position(position).to_string();
    let guidance = guidance_for(position, frame);

    let band_type = band_type(frame, volatility);

    BandInfo {
        band_type,
        period_range: band_type.period_range().to_string(),
        volatility,
        trend_strength,
        position,
        position_description,
        guidance,
        position_percent,
        high_20,
        low_20,
    }
}

fn band_type(frame: &IndicatorFrame, volatility: f64) -> BandType {
    let atr = last_value(&frame.atr);
    let volume_ratio = last_value(&frame.volume_ratio);
    let adx = last_value(&frame.adx);
    let rsi = last_value(&frame.rsi);
    let trix = last_value(&frame.trix);

    // Micro: short-term high volatility plus heavy volume.
    if volatility > 0.4 && volume_ratio > 1.5 && atr > mean_ignoring_nan(&frame.atr) * 1.2 {
        return BandType::Micro;
    }

    // Trend: strong ADX with a bullish MA stack confirmed by TRIX.
    if adx > 30.0 && ma_alignment(frame) && trix > 0.0 {
        return BandType::Trend;
    }

    // Short: Bollinger squeeze.
    if bollinger_squeeze(frame) {
        return BandType::Short;
    }

    // Oscillating: neutral RSI with a weak trend.
    if (40.0..=60.0).contains(&rsi) && adx < 20.0 {
        return BandType::Oscillating;
    }

    BandType::Standard
}

/// MA5 > MA10 > MA20 > MA60 at the latest bar. NaN anywhere fails.
pub(crate) fn ma_alignment(frame: &IndicatorFrame) -> bool {
    let (ma5, ma10) = (last_value(&frame.ma5), last_value(&frame.ma10));
    let (ma20, ma60) = (last_value(&frame.ma20), last_value(&frame.ma60));
    ma5 > ma10 && ma10 > ma20 && ma20 > ma60
}

/// Latest relative band width under 0.8x its trailing-5-bar mean.
fn bollinger_squeeze(frame: &IndicatorFrame) -> bool {
    let n = frame.len();
    let window = n.min(5);
    let mut widths = Vec::with_capacity(window);
    for i in (n - window)..n {
        let middle = frame.bb_middle[i];
        if middle == 0.0 {
            return false;
        }
        widths.push((frame.bb_upper[i] - frame.bb_lower[i]) / middle);
    }
    let latest = *widths.last().unwrap_or(&f64::NAN);
    let mean = widths.iter().sum::<f64>() / widths.len() as f64;
    latest < mean * 0.8
}

fn band_position(frame: &IndicatorFrame) -> (BandPosition, f64, f64, f64) {
    let n = frame.len();
    let window = n.min(POSITION_WINDOW);
    let bars = &frame.bars[(n - window)..];

    let high_20 = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let low_20 = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let close = frame.latest_close();

    let percent = if high_20 == low_20 {
        50.0
    } else {
        ((close - low_20) / (high_20 - low_20) * 100.0).clamp(0.0, 100.0)
    };

    let position = if percent >= 80.0 {
        BandPosition::Top
    } else if percent >= 60.0 {
        BandPosition::UpperMiddle
    } else if percent >= 40.0 {
        BandPosition::Middle
    } else if percent >= 20.0 {
        BandPosition::LowerMiddle
    } else {
        BandPosition::Bottom
    };

    (position, percent, high_20, low_20)
}

fn describe_position(position: BandPosition) -> &'static str {
    match position {
        BandPosition::Top => "Price near the 20-day high, at the top of the band",
        BandPosition::UpperMiddle => "Price in the upper-middle of the band, room left to run",
        BandPosition::Middle => "Price mid-band, direction unconfirmed",
        BandPosition::LowerMiddle => "Price in the lower-middle of the band, bounce possible",
        BandPosition::Bottom => "Price near the 20-day low, at the bottom of the band",
    }
}

fn guidance_for(position: BandPosition, frame: &IndicatorFrame) -> String {
    let mut guidance = match position {
        BandPosition::Top => "Lock in gains, set a profit target, watch for a pullback",
        BandPosition::UpperMiddle => "Keep holding, watch volume confirmation, trail the stop",
        BandPosition::Middle => "Stand aside until a clear signal, probe small at most",
        BandPosition::LowerMiddle => "Watch support, scale in on dips, keep a strict stop",
        BandPosition::Bottom => "Watch for an oversold bounce, build in tranches, control risk",
    }
    .to_string();

    let rsi = last_value(&frame.rsi);
    let rsi = if rsi.is_nan() { 50.0 } else { rsi };
    let macd_bullish = last_value(&frame.macd) > last_value(&frame.macd_signal);

    match position {
        BandPosition::Top | BandPosition::UpperMiddle if rsi > 70.0 => {
            guidance.push_str("; RSI overbought, reduce");
        }
        BandPosition::Bottom | BandPosition::LowerMiddle if rsi < 30.0 => {
            guidance.push_str("; RSI oversold, consider entry");
        }
        BandPosition::Middle if macd_bullish => {
            guidance.push_str("; MACD bullish cross, consider adding");
        }
        _ => {}
    }

    guidance
}

/// Sample stdev of daily returns, annualized. NaN below three closes.
fn annualized_volatility(closes: &[f64]) -> f64 {
    if closes.len() < 3 {
        return f64::NAN;
    }
    let returns: Vec<f64> = closes
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 {
                f64::NAN
            } else {
                w[1] / w[0] - 1.0
            }
        })
        .collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
}

fn mean_ignoring_nan(values: &[f64]) -> f64 {
    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        return f64::NAN;
    }
    valid.iter().sum::<f64>() / valid.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::compute_indicators;
    use crate::indicators::make_bars;

    fn frame_from(closes: &[f64]) -> IndicatorFrame {
        compute_indicators(&make_bars(closes)).unwrap()
    }

    #[test]
    fn steady_uptrend_is_a_trend_band() {
        // Gentle compounding keeps annualized volatility below the micro
        // threshold while the MA stack and ADX line up.
        let closes: Vec<f64> = (0..100).map(|i| 100.0 * 1.005_f64.powi(i)).collect();
        let info = classify_band(&frame_from(&closes));
        assert_eq!(info.band_type, BandType::Trend);
        assert_eq!(info.period_range, "15-30 days");
        assert!(info.trend_strength > 30.0);
    }

    #[test]
    fn flat_range_position_is_fifty() {
        let closes = vec![100.0; 30];
        let info = classify_band(&frame_from(&closes));
        assert_eq!(info.position_percent, 50.0);
        assert_eq!(info.position, BandPosition::Middle);
    }

    #[test]
    fn degenerate_range_reads_exactly_fifty() {
        use crate::indicators::make_ohlc_bars;
        let bars = make_ohlc_bars(&[(100.0, 100.0, 100.0, 100.0); 25]);
        let frame = compute_indicators(&bars).unwrap();
        let info = classify_band(&frame);
        assert_eq!(info.position_percent, 50.0);
        assert_eq!(info.high_20, info.low_20);
    }

    #[test]
    fn position_percent_is_clamped() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let info = classify_band(&frame_from(&closes));
        assert!((0.0..=100.0).contains(&info.position_percent));
        assert_eq!(info.position, BandPosition::Top);
    }

    #[test]
    fn short_history_still_classifies() {
        // Fewer than 20 bars: the position window truncates instead of
        // producing NaN.
        let closes: Vec<f64> = (0..8).map(|i| 100.0 + i as f64).collect();
        let info = classify_band(&frame_from(&closes));
        assert!(!info.position_percent.is_nan());
        assert_eq!(info.band_type, BandType::Standard);
    }

    #[test]
    fn trend_strength_defaults_when_adx_warming_up() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let info = classify_band(&frame_from(&closes));
        assert_eq!(info.trend_strength, 20.0);
    }

    #[test]
    fn oversold_refinement_at_the_bottom() {
        let mut closes: Vec<f64> = vec![100.0; 30];
        for (i, c) in closes.iter_mut().enumerate().skip(15) {
            *c = 100.0 - (i as f64 - 14.0) * 2.0;
        }
        let info = classify_band(&frame_from(&closes));
        assert_eq!(info.position, BandPosition::Bottom);
        assert!(info.guidance.contains("oversold"));
    }
}
