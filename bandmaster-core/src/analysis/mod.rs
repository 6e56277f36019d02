//! Band classification, signal evaluation and the top-level pipeline.

pub mod band;
pub mod signals;

pub use band::{classify_band, BandInfo, BandPosition, BandType};
pub use signals::{evaluate_signals, Signal, SignalEvidence, SignalResult};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decision::{compute_stops, decide, size_position, Decision, PositionAllocation, StopPlan};
use crate::domain::{FundFlowSnapshot, PositionContext};
use crate::error::AnalysisError;
use crate::frame::{compute_indicators, last_value};

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub latest_date: NaiveDate,
    pub latest_close: f64,
    pub band: BandInfo,
    pub signals: SignalResult,
    pub decision: Decision,
    pub allocation: PositionAllocation,
    pub stops: StopPlan,
}

/// Run the full pipeline: indicators, band, signals, decision, sizing,
/// stops. Errors only when the price series itself is unusable.
pub fn analyze(
    bars: &[crate::domain::PriceBar],
    fund_flow: Option<&FundFlowSnapshot>,
    position: Option<&PositionContext>,
) -> Result<Analysis, AnalysisError> {
    let frame = compute_indicators(bars)?;

    let band = classify_band(&frame);
    let signals = evaluate_signals(&frame, fund_flow);
    let decision = decide(&signals, &frame, position);
    let latest_close = frame.latest_close();
    let allocation = size_position(&decision, latest_close);
    let stops = compute_stops(latest_close, last_value(&frame.atr));

    // compute_indicators rejects empty input, so a last bar exists.
    let latest_date = frame.bars.last().map(|b| b.date).unwrap_or_default();

    Ok(Analysis {
        latest_date,
        latest_close,
        band,
        signals,
        decision,
        allocation,
        stops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    #[test]
    fn empty_series_cannot_be_analyzed() {
        assert!(matches!(
            analyze(&[], None, None),
            Err(AnalysisError::EmptyPriceSeries)
        ));
    }

    #[test]
    fn pipeline_produces_a_consistent_bundle() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0).collect();
        let bars = make_bars(&closes);
        let analysis = analyze(&bars, None, None).unwrap();

        assert_eq!(analysis.latest_close, closes[79]);
        assert_eq!(analysis.latest_date, bars[79].date);
        assert_eq!(analysis.decision.signal_count, analysis.signals.signal_count);
        assert!((0.0..=100.0).contains(&analysis.band.position_percent));
    }
}
