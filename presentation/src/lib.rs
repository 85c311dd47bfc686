//! Presentation layer for blogsmith
//!
//! This crate contains the CLI definitions and the web UI: router,
//! per-browser session store, and HTML rendering.

pub mod cli;
pub mod web;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use web::{AppState, create_router, session::SessionStore};
