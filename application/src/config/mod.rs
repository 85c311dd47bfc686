//! Application configuration
//!
//! - [`ExecutionParams`]: timeout and retry bounds for model calls

mod execution_params;

pub use execution_params::ExecutionParams;
