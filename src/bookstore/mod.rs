//! Bookstore sales tracker.
//!
//! Records employees, books and sales in `store.json` and reports total profit.

mod manager;
mod model;

pub use manager::Bookstore;
pub use model::{Book, BookSale, BookstoreData};
