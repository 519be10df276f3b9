//! Configuration management module
//!
//! This module handles locating, loading, and persisting the flat
//! key-value configuration file shared by ee services.

pub mod store;

pub use store::*;
