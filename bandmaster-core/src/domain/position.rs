//! Existing-holding context for position-aware decisions.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// An existing holding: share count and average cost basis.
///
/// Validation happens here, at the boundary — the decision engine
/// assumes a context it receives is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionContext {
    share_count: f64,
    average_cost: f64,
}

impl PositionContext {
    /// Build a context, rejecting degenerate inputs.
    pub fn new(share_count: f64, average_cost: f64) -> Result<Self, AnalysisError> {
        if !average_cost.is_finite() || average_cost <= 0.0 {
            return Err(AnalysisError::InvalidPositionContext(format!(
                "average cost must be positive, got {average_cost}"
            )));
        }
        if !share_count.is_finite() || share_count <= 0.0 {
            return Err(AnalysisError::InvalidPositionContext(format!(
                "share count must be positive, got {share_count}"
            )));
        }
        Ok(Self {
            share_count,
            average_cost,
        })
    }

    pub fn share_count(&self) -> f64 {
        self.share_count
    }

    pub fn average_cost(&self) -> f64 {
        self.average_cost
    }

    /// Unrealized profit/loss percent at `current_price`.
    pub fn profit_loss_pct(&self, current_price: f64) -> f64 {
        (current_price - self.average_cost) / self.average_cost * 100.0
    }

    /// Total cost basis of the holding.
    pub fn total_cost(&self) -> f64 {
        self.average_cost * self.share_count
    }

    /// Mark-to-market value at `current_price`.
    pub fn current_value(&self, current_price: f64) -> f64 {
        current_price * self.share_count
    }
}
