//! outlay-core
//!
//! Analytics services over outlay-domain snapshots: window filtering,
//! aggregation, month-end forecasting, trend series, and report mapping.
//! Every operation is a synchronous pure function taking the expense
//! collection, the budget, and an explicit `now` instant. No I/O, no
//! caching, no shared state.

pub mod error;
pub mod forecast_service;
pub mod report_service;
pub mod series_service;
pub mod stats_service;
pub mod time;
pub mod window_service;

pub use error::CoreError;
pub use forecast_service::*;
pub use report_service::*;
pub use series_service::*;
pub use stats_service::*;
pub use time::*;
pub use window_service::*;
