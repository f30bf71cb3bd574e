//! Dealership records and the persisted document.

use crate::employee::Employee;
use crate::storage::Document;
use crate::types::{names_match, SaleDate};
use serde::{Deserialize, Serialize};

/// A car in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub manufacturer: String,
    pub year: String,
    pub model: String,
    pub cost_price: f64,
    /// Asking price.
    pub sale_price: f64,
}

impl Car {
    pub fn is_model(&self, model: &str) -> bool {
        names_match(&self.model, model)
    }
}

/// A recorded sale.
///
/// `employee` and `car` are copies of the seller's name and the car model as
/// entered; they are not checked against the employee or car lists. `profit`
/// is captured when the model was in stock at the time of sale and is never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSale {
    pub employee: String,
    pub car: String,
    pub date: SaleDate,
    pub real_price: f64,
    #[serde(default)]
    pub profit: Option<f64>,
}

impl CarSale {
    /// Whether this is the sale identified by seller, model and date.
    pub fn matches(&self, employee: &str, model: &str, date: &SaleDate) -> bool {
        names_match(&self.employee, employee) && names_match(&self.car, model) && &self.date == date
    }
}

/// Contents of `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealershipData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub cars: Vec<Car>,
    #[serde(default)]
    pub sales: Vec<CarSale>,
}

impl Document for DealershipData {
    const KIND: &'static str = "dealership";
    const DEFAULT_FILE: &'static str = "data.json";
}
