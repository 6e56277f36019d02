//! Provider traits and structured error types.
//!
//! The traits abstract over upstream market-data sources (exchange feeds,
//! CSV import, test fakes) so implementations can be swapped and mocked.
//! "Unknown symbol" and "feed has nothing" are `Ok(None)`, not errors —
//! an `Err` means the fetch itself failed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CompanyProfile, FundFlowSnapshot, PriceBar};

/// Structured error types for provider operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("upstream error: {0}")]
    Upstream(String),
}

/// Daily price history source.
pub trait PriceHistoryProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch up to `days` of daily bars, ascending by date.
    /// `Ok(None)` means the symbol is unknown to this provider.
    fn fetch_history(&self, symbol: &str, days: u32) -> Result<Option<Vec<PriceBar>>, DataError>;
}

/// Per-symbol fund-flow source.
pub trait FundFlowProvider: Send + Sync {
    /// `Ok(None)` means no flow data exists for the symbol today.
    fn fetch_fund_flow(&self, symbol: &str) -> Result<Option<FundFlowSnapshot>, DataError>;
}

/// Company metadata source.
pub trait CompanyInfoProvider: Send + Sync {
    /// Always produces a profile; unknown symbols get
    /// [`CompanyProfile::unknown`] defaults.
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError>;
}

/// Caller-side retry policy for blocking provider calls.
///
/// The analysis core never retries; this is applied by the wrapper that
/// talks to the network before data reaches the core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub timeout_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            timeout_secs: 10,
        }
    }
}

impl RetryPolicy {
    /// Run `op` up to `attempts` times, returning the first success or
    /// the last error.
    pub fn run<T, F>(&self, mut op: F) -> Result<T, DataError>
    where
        F: FnMut() -> Result<T, DataError>,
    {
        let mut last_err = None;
        for attempt in 1..=self.attempts.max(1) {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "provider call failed");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| DataError::Upstream("no attempts made".to_string())))
    }
}
