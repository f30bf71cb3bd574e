//! Bookstore records and the persisted document.

use crate::employee::Employee;
use crate::storage::Document;
use crate::types::{names_match, SaleDate};
use serde::{Deserialize, Serialize};

/// A book title on the shelf.
///
/// `year` is kept as entered text; the add form only checks that it is all digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub year: String,
    pub author: String,
    pub genre: String,
    pub cost: f64,
    pub price: f64,
}

impl Book {
    pub fn is_titled(&self, title: &str) -> bool {
        names_match(&self.title, title)
    }
}

/// A recorded sale.
///
/// `employee` and `book` are snapshots of the stored name and title at the
/// time of sale. `profit` is fixed at creation and does not follow later
/// changes to the book's cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSale {
    pub employee: String,
    pub book: String,
    pub date: SaleDate,
    pub sale_price: f64,
    pub profit: f64,
}

/// Contents of `store.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookstoreData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub sales: Vec<BookSale>,
}

impl Document for BookstoreData {
    const KIND: &'static str = "bookstore";
    const DEFAULT_FILE: &'static str = "store.json";
}
