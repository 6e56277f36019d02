//! Trading decision matrix.
//!
//! Two modes keyed on the presence of a position context. Without one,
//! tiers of the signal count map straight to an action, ratio, target and
//! a flat 5% stop. With one, the action depends jointly on the signal
//! count and unrealized P&L, and stops anchor to the holder's cost basis.

use serde::{Deserialize, Serialize};

use crate::analysis::signals::SignalResult;
use crate::domain::PositionContext;
use crate::frame::IndicatorFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    HeavyBuy,
    Buy,
    CautiousBuy,
    Watch,
    Avoid,
    AddPosition,
    Hold,
    Reduce,
    StopLoss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// 0-100.
    pub confidence: u8,
    /// Suggested fraction of capital. Negative values are reduction
    /// instructions (-1.0 = full exit), not allocations.
    pub position_ratio: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    pub holding_period: String,
    pub signal_count: usize,
    /// True only for the stop-loss exit.
    pub urgent: bool,
}

/// Round a derived price to cents after the multiplication.
pub(crate) fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map a signal result (and an optional held position) onto a decision.
pub fn decide(
    signals: &SignalResult,
    frame: &IndicatorFrame,
    position: Option<&PositionContext>,
) -> Decision {
    let price = frame.latest_close();
    match position {
        Some(ctx) => position_aware(signals.signal_count, price, ctx),
        None => no_position(signals.signal_count, price),
    }
}

fn no_position(signal_count: usize, price: f64) -> Decision {
    let (action, confidence, position_ratio, target_multiplier, holding_period) =
        if signal_count >= 5 {
            (Action::HeavyBuy, 90, 0.75, 1.15, "5-15 days")
        } else if signal_count >= 4 {
            (Action::Buy, 75, 0.45, 1.10, "3-7 days")
        } else if signal_count >= 3 {
            (Action::CautiousBuy, 60, 0.15, 1.06, "1-3 days")
        } else if signal_count >= 2 {
            (Action::Watch, 40, 0.0, 1.03, "1-2 days")
        } else {
            (Action::Avoid, 25, 0.0, 1.00, "wait")
        };

    Decision {
        action,
        confidence,
        position_ratio,
        target_price: round_price(price * target_multiplier),
        stop_loss: round_price(price * 0.95),
        holding_period: holding_period.to_string(),
        signal_count,
        urgent: false,
    }
}

fn position_aware(signal_count: usize, price: f64, ctx: &PositionContext) -> Decision {
    let pl_pct = ctx.profit_loss_pct(price);
    let cost = ctx.average_cost();

    let (action, confidence, position_ratio, target, stop, holding_period, urgent) =
        if signal_count >= 4 && pl_pct < 0.0 {
            // Technicals improving while under water: average down.
            (Action::AddPosition, 75, 0.5, price * 1.12, cost * 0.93, "3-10 days", false)
        } else if signal_count <= 2 && pl_pct > 5.0 {
            (Action::Reduce, 70, -0.3, price * 1.03, cost * 0.97, "1-3 days", false)
        } else if signal_count <= 1 && pl_pct < -3.0 {
            (Action::StopLoss, 85, -1.0, price, price * 0.98, "immediately", true)
        } else if signal_count >= 3 {
            (Action::Hold, 80, 0.0, price * 1.08, cost * 0.95, "2-7 days", false)
        } else {
            (Action::Watch, 50, 0.0, price * 1.05, price * 0.95, "wait and see", false)
        };

    Decision {
        action,
        confidence,
        position_ratio,
        target_price: round_price(target),
        stop_loss: round_price(stop),
        holding_period: holding_period.to_string(),
        signal_count,
        urgent,
    }
}
