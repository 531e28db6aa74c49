//! Item persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for storing
//! inventory records without making any storage assumptions, plus the two
//! shipped backends: a process-local in-memory store and a Postgres store.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;
pub use r#trait::{ItemStore, StoreError};
