//! Command implementations for the forpublic CLI
//!
//! Each command lives in its own module.

pub mod catalog;
pub mod config;
pub mod serve;
pub mod version;
