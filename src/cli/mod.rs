//! Command-Line Interface
//!
//! `books` runs the HTTP server by default and also offers two one-shot commands:
//! - **`search <name>`**: lists catalog books whose title contains `name`.
//! - **`simulate <id>...`**: runs a reading simulation and prints one line per id.
//!
//! Identifier tokens are validated here, before the engine sees them: anything that
//! is not an integer is reported and dropped.
//!
//! ## Submodules
//! - **`args`**: `clap` definitions and configuration overrides.
//! - **`commands`**: The command implementations, writing to any `io::Write`.

pub mod args;
pub mod commands;
