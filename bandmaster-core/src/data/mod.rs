//! Provider traits, retry policy and the history cache.

pub mod cache;
pub mod provider;

pub use cache::CachedHistory;
pub use provider::{
    CompanyInfoProvider, DataError, FundFlowProvider, PriceHistoryProvider, RetryPolicy,
};
