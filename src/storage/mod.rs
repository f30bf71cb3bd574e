//! Record persistence.
//!
//! Provides the JSON document store shared by all three programs.

mod collection;
mod json_store;

pub use collection::{query, remove_all, remove_first};
pub use json_store::{to_pretty_json, Document, JsonStore};
