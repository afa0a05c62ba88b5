//! HTTP API starter service.
//!
//! A minimal skeleton for building HTTP APIs: environment-driven
//! configuration, a static route table with an example resource, a
//! health-check endpoint for orchestration tooling, and interactive
//! OpenAPI documentation generated from the handler annotations.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Route table, core handlers, docs, and middleware
//! - [`employees`]: Example in-memory resource with CRUD handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod employees;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError};
