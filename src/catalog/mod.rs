//! Catalog Store Module
//!
//! Read access to the book records the simulation engine works against.
//!
//! ## Core Concepts
//! - **Records**: `Book` is an immutable snapshot; callers never mutate what a lookup returns.
//! - **Store Seam**: `CatalogStore` is the only surface the engine depends on, so any backend
//!   that is safe for concurrent reads can be plugged in.
//! - **Memory Backend**: `MemoryCatalog` keeps records in a `DashMap` and is loaded once at
//!   startup (from a JSON file or the built-in sample).

pub mod memory;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
