//! # faqdesk-core
//!
//! Core crate for FAQ Desk. Contains the host-facing traits, configuration
//! schemas, loose value helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FAQ Desk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
