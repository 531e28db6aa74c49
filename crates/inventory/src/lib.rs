//! Inventory domain module.
//!
//! This crate contains the business rules for inventory records, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//! creation/update validation with partial-update merge semantics, and the
//! summary report aggregation with its CSV rendering.

pub mod item;
pub mod report;

pub use item::{validate_create, validate_update, Item, ItemInput, NewItem};
pub use report::{build_report, render_csv, CategoryBreakdown, CategorySummary, Report};
