//! outlay-domain
//!
//! Pure domain models for expense tracking (Expense, Category, Budget,
//! time windows, and derived report types). No I/O, no services, no storage.
//! Only data types, validation, and the arithmetic that belongs to them.

pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod report;
pub mod window;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use expense::*;
pub use report::*;
pub use window::*;
