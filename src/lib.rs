//! Book Catalog Reading Simulator Library
//!
//! This library crate holds everything the `books` binary (`main.rs`) wires together.
//!
//! ## Architecture Modules
//! - **`catalog`**: Book records and the read-only `CatalogStore` seam, with an in-memory
//!   backend loaded from JSON.
//! - **`simulation`**: The concurrent reading engine. It fans out one task per requested
//!   book id and fans the outcomes back in through a single-use aggregator.
//! - **`cli`**: Command-line parsing and the `search` / `simulate` commands.
//! - **`server`**: The Axum router exposing the simulation over HTTP.
//! - **`config`**: Environment-driven settings.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod server;
pub mod simulation;
