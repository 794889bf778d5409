//! HTTP Protocol Definitions
//!
//! Endpoint paths and DTOs for the simulation boundary. The response body is a bare
//! JSON array of result lines, in completion order.

use crate::catalog::types::BookId;
use serde::{Deserialize, Deserializer, Serialize};

/// Public endpoint that runs a simulation batch.
pub const ENDPOINT_SIMULATE: &str = "/books/simulate";

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// A missing field and `null` both decode to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub book_ids: Vec<BookId>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<BookId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<BookId>>::deserialize(deserializer)?.unwrap_or_default())
}
