//! Session domain
//!
//! Per-session state kept between form submissions.

pub mod keywords;

pub use keywords::{KeywordState, SessionKeywordList, format_keywords};
