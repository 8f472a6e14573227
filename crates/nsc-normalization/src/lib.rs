//! Field normalization shared by the request and return sides.
//!
//! - **text**: trimming, truncation and ASCII filtering of name fields
//! - **date**: `YYYYMMDD` coercion and partial search-date expansion

pub mod date;
pub mod error;
pub mod text;

pub use date::{
    COMPACT_DATE_FORMAT, coerce_date_to_compact, expand_partial_search_date, format_compact,
    parse_compact_date,
};
pub use error::FormatError;
pub use text::{ascii_only, single_line, truncate_trim, truncate_trim_ascii};
