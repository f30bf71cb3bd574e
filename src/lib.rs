//! # Tally - Small Record-Keeping Programs
//!
//! Three independent programs that keep a handful of records in a JSON file:
//!
//! - **Bookstore**: employees, books and sales with total profit (`store.json`)
//! - **Dealer**: employees, cars and sales with date-range reports (`data.json`)
//! - **Apartments**: apartments and their residents (`house_data.json`)
//!
//! Every program loads its whole file on start and rewrites it after each
//! change. There is no locking; one process owns a file at a time.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tally::dealership::{Car, Dealership};
//! use tally::storage::JsonStore;
//! use tally::types::{DateRange, SaleDate};
//!
//! let mut shop = Dealership::new(JsonStore::open("data.json")?);
//! shop.add_car(Car {
//!     manufacturer: "Toyota".into(),
//!     year: "2020".into(),
//!     model: "Camry".into(),
//!     cost_price: 60.0,
//!     sale_price: 90.0,
//! })?;
//! shop.add_sale("Anna", "Camry", "2024-03-01".parse()?, 100.0)?;
//!
//! let year = DateRange::new("2024-01-01".parse()?, "2024-12-31".parse::<SaleDate>()?);
//! assert_eq!(shop.total_profit(&year), 40.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`storage`] - JSON document store shared by the programs
//! - [`types`] - Name folding and sale dates
//! - [`report`] - Frequency and sum aggregates
//! - [`bookstore`], [`dealership`], [`apartments`] - The three programs
//! - [`config`] - Settings and data file resolution
//! - [`cli`] - Interactive sessions and export
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod apartments;
pub mod bookstore;
pub mod cli;
pub mod config;
pub mod dealership;
pub mod employee;
pub mod error;
pub mod output;
pub mod report;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use employee::Employee;
pub use error::{CliError, RecordError, StorageError};
pub use storage::{Document, JsonStore};
pub use types::{DateRange, SaleDate};
