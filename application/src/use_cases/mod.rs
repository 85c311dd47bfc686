//! Use cases for the application layer
//!
//! - [`suggest_titles`]: topic → list of candidate titles
//! - [`generate_post`]: title, keywords and length → drafted post

pub mod generate_post;
pub mod shared;
pub mod suggest_titles;

#[cfg(test)]
pub(crate) mod test_support;
