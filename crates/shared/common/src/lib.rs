//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration structures
//! - Pagination types

pub mod config;
pub mod error;
pub mod pagination;

pub use config::*;
pub use error::{AppError, AppResult};
pub use pagination::{Paginated, PaginationMeta, PaginationParams};
