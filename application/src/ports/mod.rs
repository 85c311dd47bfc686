//! Ports (interfaces) for the application layer
//!
//! Implemented by adapters in the infrastructure layer.

pub mod generation_logger;
pub mod llm_gateway;
