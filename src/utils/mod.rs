//! Utility Module Implementation
//! Author: kartik4091
//! Created: 2025-06-03 09:14:13 UTC
//!
//! Logging setup and small text helpers.

pub mod logger;
pub mod text;

pub use self::{
    logger::Logger,
    text::{char_prefix, truncate_chars},
};
