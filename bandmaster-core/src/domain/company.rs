//! Company metadata returned by the (external) info provider.

use serde::{Deserialize, Serialize};

/// Name, industry, and valuation fields for a symbol.
///
/// Providers fall back to [`unknown`](Self::unknown) when the upstream
/// feed has nothing for a symbol; zeros mean "not reported".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub pb_ratio: f64,
}

impl CompanyProfile {
    pub fn unknown(symbol: &str) -> Self {
        Self {
            name: format!("Stock {symbol}"),
            industry: "unknown".to_string(),
            market_cap: 0.0,
            pe_ratio: 0.0,
            pb_ratio: 0.0,
        }
    }
}
