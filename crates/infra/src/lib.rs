//! Infrastructure layer: item persistence backends.

pub mod item_store;
