//! Car dealership sales tracker.
//!
//! Records employees, cars and sales in `data.json`, with date-range reports.

mod manager;
mod model;

pub use manager::{Dealership, Leader};
pub use model::{Car, CarSale, DealershipData};
