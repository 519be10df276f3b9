//! ee - global configuration management tool
//!
//! A CLI tool for inspecting and editing the flat key-value configuration
//! file shared by ee services, including get/set/unset operations and
//! formatted listing output.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::{EeError, Result};
