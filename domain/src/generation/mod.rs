//! Generation requests and results
//!
//! A [`GenerationRequest`] binds a template to its placeholder values for a
//! single user action; a [`GenerationResult`] is the raw completion.

mod request;
mod result;

pub use request::GenerationRequest;
pub use result::GenerationResult;
