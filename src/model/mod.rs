//! Exchange entities
//!
//! # Overview
//!
//! serde mirrors of the exchange's JSON objects. Decimal amounts travel as
//! strings and decode to `f64`; timestamps are RFC 3339 in UTC.
//!
//! - [`Account`], [`LedgerEntry`], [`Hold`]: read-only account data
//! - [`Order`]: request and response of order placement, all fields optional
//! - [`Report`]: request and response of report creation, all fields optional
//!
//! `Order` and `Report` implement [`crate::reconcile::Reconcile`] so a create
//! call can return the server's object with the request's fields filled in.

mod account;
mod order;
mod report;

pub use account::{Account, EntryType, Hold, HoldType, LedgerDetails, LedgerEntry};
pub use order::{
    CancelAfter, Order, OrderStatus, OrderType, SelfTradePrevention, Side, StatusFilter, StopType,
    TimeInForce,
};
pub use report::{Report, ReportFormat, ReportParams, ReportStatus, ReportType};
