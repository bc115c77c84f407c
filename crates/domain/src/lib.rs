//! # Lyricer Domain
//!
//! Domain types shared by every Lyricer crate.
//!
//! This crate contains:
//! - Provider and application configuration structures
//! - The error taxonomy and `Result` alias
//! - Session, now-playing and song value types
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Lyricer crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
