//! Fund-flow snapshot — net buy/sell pressure by participant size class.

use serde::{Deserialize, Serialize};

/// Net inflow breakdown for a symbol, signed currency amounts.
///
/// `available` is set by the provider: `false` means the upstream feed
/// returned nothing usable. Independently of that flag, a snapshot whose
/// fields are all exactly zero is still treated as unavailable by
/// [`has_data`](Self::has_data) — a genuinely flat day is therefore
/// indistinguishable from missing data. Known limitation, kept for
/// compatibility with the upstream feed's behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundFlowSnapshot {
    pub main_net_inflow: f64,
    pub retail_net_inflow: f64,
    pub super_large_net_inflow: f64,
    pub large_net_inflow: f64,
    pub medium_net_inflow: f64,
    pub small_net_inflow: f64,
    pub available: bool,
}

impl FundFlowSnapshot {
    /// An explicit "provider had nothing" marker.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// True when every inflow field is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        self.main_net_inflow == 0.0
            && self.retail_net_inflow == 0.0
            && self.super_large_net_inflow == 0.0
            && self.large_net_inflow == 0.0
            && self.medium_net_inflow == 0.0
            && self.small_net_inflow == 0.0
    }

    /// Whether the snapshot carries usable data.
    pub fn has_data(&self) -> bool {
        self.available && !self.is_all_zero()
    }
}
