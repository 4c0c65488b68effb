//! Korastats MCP Server Library
//!
//! This library turns the Korastats football-statistics API into three
//! callable tools that return bounded, human-readable text reports. Each
//! tool runs the same pipeline: validate inputs, issue one authenticated
//! GET, unwrap the upstream envelope, and render a report — with every
//! failure resolved to a prefix-tagged string at the tool boundary
//! (`❌` error, `⚠️` empty result, `📊` success).
//!
//! # Examples
//!
//! ```rust,no_run
//! use korastats_mcp::config::Config;
//! use korastats_mcp::error::AppError;
//! use korastats_mcp::tools::KorastatsTools;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Arc::new(Config::from_env()?);
//!     let tools = KorastatsTools::new(config)?;
//!
//!     let report = tools.list_seasons("1", "20").await;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod korastats;
pub mod logging;
pub mod report;
pub mod server;
pub mod tools;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use server::KorastatsServer;
pub use tools::KorastatsTools;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
