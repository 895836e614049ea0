//! Shared configuration and errors for Coinage.
//!
//! This crate provides the application layer around `coinage-core`:
//! - Configuration management (files plus `COINAGE__*` environment variables)
//! - Application-wide error types

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
