//! Reading Simulation Module
//!
//! Simulates "reading" a batch of books concurrently and reports one status line per
//! requested identifier.
//!
//! ## Architecture Overview
//! The engine follows a **fan-out / fan-in** model:
//! 1. **Dispatch**: One task is spawned per requested id, duplicates included.
//! 2. **Lookup**: Each task queries the shared `CatalogStore`. A miss (or a store error)
//!    is reported right away.
//! 3. **Reading**: A hit waits the batch's fixed duration before reporting completion.
//! 4. **Aggregation**: `ResultAggregator` gathers exactly one outcome per task, in the order
//!    tasks finish, and releases them once all have arrived.
//!
//! Concurrency is unbounded unless the engine is built with a concurrency limit.
//! There is no cancellation: a dispatched task always runs to completion.
//!
//! ## Submodules
//! - **`engine`**: Dispatch and per-task logic.
//! - **`aggregator`**: The single-use collection point.
//! - **`handlers`**: Axum handler for the HTTP boundary.
//! - **`protocol`**: Endpoint constants and request DTOs.
//! - **`types`**: The outcome of a single simulated reading.

pub mod aggregator;
pub mod engine;
pub mod handlers;
pub mod protocol;
pub mod types;
