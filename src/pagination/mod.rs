//! Pagination module
//!
//! # Overview
//!
//! [`Pager`] is a lazy, forward-only iterator over a cursor-paginated
//! collection. It buffers one decoded page at a time and fetches the next page
//! only when the buffer runs dry, using the cursor the server returned in the
//! `CB-AFTER` header of the previous response.
//!
//! The pull protocol is two calls:
//!
//! ```rust,ignore
//! let mut holds = client.get_account_holds(account_id);
//! while holds.has_more().await {
//!     let hold = holds.take_next()?;
//!     println!("{} {}", hold.id, hold.amount);
//! }
//! ```
//!
//! `has_more` is the only call that performs I/O. A failed fetch is captured
//! and handed out by the next `take_next`.

mod pager;
mod types;

pub use pager::Pager;
pub use types::{PageMode, PagerState, CURSOR_HEADER, CURSOR_PARAM};
