//! Response decoder module
//!
//! # Overview
//!
//! The decode module turns raw response bodies into typed values. Page
//! decoders produce an ordered `Vec<T>` for the pager; `decode_one` parses a
//! single object for plain GET and create calls. The `string_f64` helpers
//! handle decimal amounts that the exchange sends as JSON strings.

mod decoders;
mod numbers;

pub use decoders::{decode_one, json_page, JsonPageDecoder, PageDecoder};
pub use numbers::{option_string_f64, string_f64};
