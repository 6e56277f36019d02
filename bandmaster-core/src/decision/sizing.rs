//! Splitting a position ratio into staged entries.
//!
//! Higher signal counts front-load the base entry; weaker counts keep
//! more powder dry for breakout and pullback adds. The four shares always
//! sum to the decision's ratio when that ratio is positive; reduction
//! instructions (negative ratios) are not split.

use serde::{Deserialize, Serialize};

use crate::decision::engine::{round_price, Decision};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionAllocation {
    /// Entered immediately.
    pub base: f64,
    /// Added on a confirmed breakout.
    pub breakout_add: f64,
    /// Added on a pullback to support.
    pub pullback_add: f64,
    /// Kept for intraday flexibility.
    pub flexible: f64,
    /// Flat 5% protective stop for the staged entries.
    pub stop_loss: f64,
    /// 15% take-profit anchor for the staged entries.
    pub take_profit: f64,
}

impl PositionAllocation {
    pub fn total(&self) -> f64 {
        self.base + self.breakout_add + self.pullback_add + self.flexible
    }
}

/// Weights per signal-count tier: base, breakout, pullback, flexible.
fn tier_weights(signal_count: usize) -> [f64; 4] {
    if signal_count >= 5 {
        [0.60, 0.25, 0.10, 0.05]
    } else if signal_count >= 4 {
        [0.50, 0.25, 0.15, 0.10]
    } else if signal_count >= 3 {
        [0.40, 0.30, 0.20, 0.10]
    } else if signal_count >= 2 {
        [0.30, 0.35, 0.25, 0.10]
    } else {
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Split a decision's position ratio into the four staged buckets.
pub fn size_position(decision: &Decision, latest_price: f64) -> PositionAllocation {
    let ratio = decision.position_ratio.max(0.0);
    let [base, breakout, pullback, flexible] = tier_weights(decision.signal_count);

    PositionAllocation {
        base: base * ratio,
        breakout_add: breakout * ratio,
        pullback_add: pullback * ratio,
        flexible: flexible * ratio,
        stop_loss: round_price(latest_price * 0.95),
        take_profit: round_price(latest_price * 1.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::engine::Action;

    fn decision(signal_count: usize, position_ratio: f64) -> Decision {
        Decision {
            action: Action::Buy,
            confidence: 75,
            position_ratio,
            target_price: 11.0,
            stop_loss: 9.5,
            holding_period: "3-7 days".to_string(),
            signal_count,
            urgent: false,
        }
    }

    #[test]
    fn shares_sum_to_the_ratio() {
        for (count, ratio) in [(5, 0.75), (4, 0.45), (3, 0.15), (2, 0.10)] {
            let allocation = size_position(&decision(count, ratio), 10.0);
            assert!(
                (allocation.total() - ratio).abs() < 1e-9,
                "tier {count}: {} != {ratio}",
                allocation.total()
            );
        }
    }

    #[test]
    fn high_tier_front_loads_the_base() {
        let strong = size_position(&decision(5, 0.75), 10.0);
        let weak = size_position(&decision(2, 0.75), 10.0);
        assert!(strong.base / 0.75 > weak.base / 0.75);
        assert!(strong.base > strong.breakout_add);
        assert!(weak.breakout_add > weak.base);
    }

    #[test]
    fn zero_signals_means_zero_everywhere() {
        let allocation = size_position(&decision(0, 0.5), 10.0);
        assert_eq!(allocation.total(), 0.0);
        let allocation = size_position(&decision(1, 0.5), 10.0);
        assert_eq!(allocation.total(), 0.0);
    }

    #[test]
    fn reductions_are_not_split() {
        let allocation = size_position(&decision(2, -0.3), 10.0);
        assert_eq!(allocation.total(), 0.0);
    }

    #[test]
    fn anchors_round_to_cents() {
        let allocation = size_position(&decision(4, 0.45), 10.33);
        assert_eq!(allocation.stop_loss, 9.81); // 10.33 * 0.95 = 9.8135
        assert_eq!(allocation.take_profit, 11.88); // 10.33 * 1.15 = 11.8795
    }
}
