//! Testing utilities and helpers
//!
//! - **[`builders`]**: fluent builders for provider configuration
//! - **[`fixtures`]**: canned provider response bodies
//!
//! ## Usage
//!
//! ```rust
//! use lyricer_common::testing::builders::ProviderConfigBuilder;
//!
//! let config = ProviderConfigBuilder::for_server("http://127.0.0.1:4000")
//!     .scopes(["user-read-currently-playing"])
//!     .build();
//! assert_eq!(config.token_url, "http://127.0.0.1:4000/api/token");
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::ProviderConfigBuilder;
