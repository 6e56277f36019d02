//! Six-dimension signal check.
//!
//! Each signal is a pure function of the indicator frame (plus the
//! optional fund-flow snapshot) — no signal reads another's result, so
//! evaluation order cannot matter. NaN comparisons are false, which makes
//! a warming-up indicator fail its signal rather than panic.

use serde::{Deserialize, Serialize};

use crate::analysis::band::ma_alignment;
use crate::domain::FundFlowSnapshot;
use crate::frame::{last_value, IndicatorFrame};

/// Inputs a signal was judged on, kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignalEvidence {
    Trend { ma_aligned: bool, trix: f64, adx: f64 },
    Momentum { rsi: f64, cci: f64, willr: f64 },
    Volume { ratio: f64, adosc: f64 },
    Fund { main_net_inflow: f64 },
    Pattern {
        bb_breakout: bool,
        macd_cross: bool,
        volume_breakout: bool,
        above_sar: bool,
    },
    Market { adx: f64, ultosc: f64 },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub status: bool,
    pub evidence: SignalEvidence,
    pub description: String,
}

impl Signal {
    fn new(status: bool, evidence: SignalEvidence, on: &str, off: &str) -> Self {
        Self {
            status,
            evidence,
            description: if status { on.to_string() } else { off.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub trend_direction: Signal,
    pub momentum_strength: Signal,
    pub volume_cooperation: Signal,
    pub fund_verification: Signal,
    pub pattern_confirmation: Signal,
    pub market_environment: Signal,
    /// Number of passing signals, 0..=6.
    pub signal_count: usize,
    /// 6 normally, 5 when fund data is unavailable.
    pub total_signals: usize,
    pub fund_data_available: bool,
    /// signal_count / total_signals as a percentage.
    pub overall_score: f64,
}

/// Run all six signal checks against the latest bar of the frame.
pub fn evaluate_signals(
    frame: &IndicatorFrame,
    fund_flow: Option<&FundFlowSnapshot>,
) -> SignalResult {
    let trend_direction = trend_signal(frame);
    let momentum_strength = momentum_signal(frame);
    let volume_cooperation = volume_signal(frame);
    let (fund_verification, fund_data_available) = fund_signal(fund_flow);
    let pattern_confirmation = pattern_signal(frame);
    let market_environment = market_signal(frame);

    let signal_count = [
        &trend_direction,
        &momentum_strength,
        &volume_cooperation,
        &fund_verification,
        &pattern_confirmation,
        &market_environment,
    ]
    .iter()
    .filter(|s| s.status)
    .count();

    let total_signals = if fund_data_available { 6 } else { 5 };
    let overall_score = signal_count as f64 / total_signals as f64 * 100.0;

    SignalResult {
        trend_direction,
        momentum_strength,
        volume_cooperation,
        fund_verification,
        pattern_confirmation,
        market_environment,
        signal_count,
        total_signals,
        fund_data_available,
        overall_score,
    }
}

fn trend_signal(frame: &IndicatorFrame) -> Signal {
    let ma_aligned = ma_alignment(frame);
    let trix = last_value(&frame.trix);
    let adx = last_value(&frame.adx);
    let status = ma_aligned && trix > 0.0 && adx > 25.0;
    Signal::new(
        status,
        SignalEvidence::Trend { ma_aligned, trix, adx },
        "Bullish MA stack confirmed by TRIX",
        "Trend direction unclear",
    )
}

fn momentum_signal(frame: &IndicatorFrame) -> Signal {
    // Neutral fallbacks: a warming-up oscillator should not veto the
    // other two.
    let rsi = non_nan_or(last_value(&frame.rsi), 50.0);
    let cci = non_nan_or(last_value(&frame.cci), 0.0);
    let willr = non_nan_or(last_value(&frame.willr), -50.0);
    let status = (45.0..=75.0).contains(&rsi)
        && (-100.0..=100.0).contains(&cci)
        && (-80.0..=-20.0).contains(&willr);
    Signal::new(
        status,
        SignalEvidence::Momentum { rsi, cci, willr },
        "Momentum healthy across RSI, CCI and Williams %R",
        "Momentum outside the healthy bands",
    )
}

fn volume_signal(frame: &IndicatorFrame) -> Signal {
    let ratio = last_value(&frame.volume_ratio);
    let adosc = last_value(&frame.adosc);
    let status = ratio > 1.2 && adosc > 0.0;
    Signal::new(
        status,
        SignalEvidence::Volume { ratio, adosc },
        "Volume expanding with accumulation",
        "Volume not cooperating",
    )
}

fn fund_signal(fund_flow: Option<&FundFlowSnapshot>) -> (Signal, bool) {
    match fund_flow {
        Some(snapshot) if snapshot.has_data() => {
            let status = snapshot.main_net_inflow > 0.0;
            let signal = Signal::new(
                status,
                SignalEvidence::Fund {
                    main_net_inflow: snapshot.main_net_inflow,
                },
                "Main funds flowing in",
                "Main funds flowing out",
            );
            (signal, true)
        }
        _ => {
            let signal = Signal::new(
                false,
                SignalEvidence::Unavailable,
                "",
                "Fund-flow data unavailable",
            );
            (signal, false)
        }
    }
}

fn pattern_signal(frame: &IndicatorFrame) -> Signal {
    let n = frame.len();
    let close = frame.latest_close();

    let bb_breakout = close > last_value(&frame.bb_upper);
    let macd_cross = n >= 2
        && last_value(&frame.macd) > last_value(&frame.macd_signal)
        && frame.macd[n - 2] <= frame.macd_signal[n - 2];
    let volume_breakout = last_value(&frame.volume_ratio) > 1.5;
    let above_sar = close > last_value(&frame.sar);

    // Breakout needs a meaningful history behind it.
    let checks = [bb_breakout, macd_cross, volume_breakout]
        .iter()
        .filter(|c| **c)
        .count();
    let status = n >= 20 && checks >= 2 && above_sar;

    Signal::new(
        status,
        SignalEvidence::Pattern {
            bb_breakout,
            macd_cross,
            volume_breakout,
            above_sar,
        },
        "Breakout pattern confirmed above SAR",
        "No confirmed breakout pattern",
    )
}

fn market_signal(frame: &IndicatorFrame) -> Signal {
    let adx = last_value(&frame.adx);
    let ultosc = last_value(&frame.ultosc);
    let status = adx > 25.0 && ultosc > 30.0 && ultosc < 70.0;
    Signal::new(
        status,
        SignalEvidence::Market { adx, ultosc },
        "Trending market without exhaustion",
        "Market environment unfavorable",
    )
}

fn non_nan_or(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value
    }
}
