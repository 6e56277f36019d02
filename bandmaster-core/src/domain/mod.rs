//! Domain types for BandMaster.

pub mod bar;
pub mod company;
pub mod fund_flow;
pub mod position;

pub use bar::PriceBar;
pub use company::CompanyProfile;
pub use fund_flow::FundFlowSnapshot;
pub use position::PositionContext;
