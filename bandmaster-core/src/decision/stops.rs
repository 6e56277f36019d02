//! Stop-loss and take-profit ladder.
//!
//! Percentage deltas are applied before any rounding; every output price
//! is then rounded to cents. A missing or degenerate ATR falls back to 2%
//! of the price so the ATR-anchored stops are always defined.

use serde::{Deserialize, Serialize};

use crate::decision::engine::round_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopPlan {
    /// Stepped take-profits at +15%, +25% and +40%.
    pub first_target: f64,
    pub second_target: f64,
    pub third_target: f64,
    /// Trailing stop 7% below the current price.
    pub trailing_stop: f64,
    /// Exit after this many days without progress.
    pub time_stop_days: u32,
    /// Hard exit at price minus two ATRs.
    pub emergency_stop: f64,
    /// ATR-anchored profit objective at price plus three ATRs.
    pub take_profit: f64,
    /// The ATR actually used, after the fallback.
    pub atr_used: f64,
}

const TIME_STOP_DAYS: u32 = 5;

/// Build the stop ladder for a price and its latest ATR.
pub fn compute_stops(latest_price: f64, atr: f64) -> StopPlan {
    let atr_used = if atr.is_nan() || atr <= 0.0 {
        latest_price * 0.02
    } else {
        atr
    };

    StopPlan {
        first_target: round_price(latest_price * 1.15),
        second_target: round_price(latest_price * 1.25),
        third_target: round_price(latest_price * 1.40),
        trailing_stop: round_price(latest_price * 0.93),
        time_stop_days: TIME_STOP_DAYS,
        emergency_stop: round_price(latest_price - 2.0 * atr_used),
        take_profit: round_price(latest_price + 3.0 * atr_used),
        atr_used,
    }
}
