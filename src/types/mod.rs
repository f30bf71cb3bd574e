//! Core value types shared by the three programs.
//!
//! Name folding for lookups and validated sale dates.

mod name;
mod sale_date;

pub use name::{fold_name, names_match, title_case};
pub use sale_date::{DateRange, SaleDate, SaleDateError};
