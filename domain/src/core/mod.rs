//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the hosted model that drafts titles and posts
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
