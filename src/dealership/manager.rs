//! Dealership record operations and reports.

use super::model::{Car, CarSale, DealershipData};
use crate::employee::Employee;
use crate::error::StorageResult;
use crate::report::{most_frequent, total};
use crate::storage::{query, remove_first, JsonStore};
use crate::types::{fold_name, names_match, DateRange, SaleDate};
use tracing::{debug, info};

/// Result of a best-seller style report.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    /// Name or model as first recorded.
    pub name: String,
    pub sales: usize,
}

/// Employees, cars and sales of one dealership.
pub struct Dealership {
    store: JsonStore<DealershipData>,
}

impl Dealership {
    pub fn new(store: JsonStore<DealershipData>) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, employee: Employee) -> StorageResult<()> {
        let name = employee.name.clone();
        self.store.mutate(|d| d.employees.push(employee))?;
        info!(%name, "employee added");
        Ok(())
    }

    pub fn add_car(&mut self, car: Car) -> StorageResult<()> {
        let model = car.model.clone();
        self.store.mutate(|d| d.cars.push(car))?;
        info!(%model, "car added");
        Ok(())
    }

    /// Record a sale, capturing profit from the first car with a matching model.
    pub fn add_sale(
        &mut self,
        employee: &str,
        model: &str,
        date: SaleDate,
        real_price: f64,
    ) -> StorageResult<CarSale> {
        let profit = self
            .store
            .doc()
            .cars
            .iter()
            .find(|c| c.is_model(model))
            .map(|c| real_price - c.cost_price);
        if profit.is_none() {
            debug!(model, "sale for a model not in stock, no profit recorded");
        }

        let sale = CarSale {
            employee: employee.trim().to_string(),
            car: model.trim().to_string(),
            date,
            real_price,
            profit,
        };
        let recorded = sale.clone();
        self.store.mutate(|d| d.sales.push(sale))?;
        info!(employee = %recorded.employee, car = %recorded.car, "sale recorded");
        Ok(recorded)
    }

    /// Remove the first employee with this name. Past sales are kept.
    pub fn delete_employee(&mut self, name: &str) -> StorageResult<Option<Employee>> {
        self.store
            .mutate_if(|d| remove_first(&mut d.employees, |e| e.is_named(name)))
    }

    /// Remove the first car of this model.
    pub fn delete_car(&mut self, model: &str) -> StorageResult<Option<Car>> {
        self.store
            .mutate_if(|d| remove_first(&mut d.cars, |c| c.is_model(model)))
    }

    /// Remove the first sale matching seller, model and date.
    pub fn delete_sale(
        &mut self,
        employee: &str,
        model: &str,
        date: SaleDate,
    ) -> StorageResult<Option<CarSale>> {
        self.store
            .mutate_if(|d| remove_first(&mut d.sales, |s| s.matches(employee, model, &date)))
    }

    /// Sales dated within `range`, in insertion order.
    pub fn sales_in_range(&self, range: &DateRange) -> Vec<&CarSale> {
        query(&self.store.doc().sales, |s| range.contains(&s.date))
    }

    /// Sum of actual sale prices within `range`.
    pub fn total_revenue(&self, range: &DateRange) -> f64 {
        total(&self.sales_in_range(range), |s| s.real_price)
    }

    /// Sum of recorded profit within `range`. Sales without profit count as zero.
    pub fn total_profit(&self, range: &DateRange) -> f64 {
        total(&self.sales_in_range(range), |s| s.profit.unwrap_or(0.0))
    }

    /// Employee with the most sales in `range`.
    pub fn best_seller(&self, range: &DateRange) -> Option<Leader> {
        leader(self.sales_in_range(range), |s| &s.employee)
    }

    /// Car model with the most sales in `range`.
    pub fn best_selling_car(&self, range: &DateRange) -> Option<Leader> {
        leader(self.sales_in_range(range), |s| &s.car)
    }

    /// All sales made by `employee`.
    pub fn sales_by_employee(&self, employee: &str) -> Vec<&CarSale> {
        query(&self.store.doc().sales, |s| names_match(&s.employee, employee))
    }

    pub fn employees(&self) -> &[Employee] {
        &self.store.doc().employees
    }

    pub fn cars(&self) -> &[Car] {
        &self.store.doc().cars
    }

    pub fn sales(&self) -> &[CarSale] {
        &self.store.doc().sales
    }

    pub fn data(&self) -> &DealershipData {
        self.store.doc()
    }

    /// Flush and release the backing store.
    pub fn close(self) -> StorageResult<()> {
        self.store.close()
    }
}

/// Count sales by folded key, reporting the spelling seen first.
fn leader<'a>(sales: Vec<&'a CarSale>, key: impl Fn(&'a CarSale) -> &'a String) -> Option<Leader> {
    let (folded, count) = most_frequent(sales.iter().map(|s| fold_name(key(s))))?;
    let name = sales
        .iter()
        .map(|s| key(s))
        .find(|k| fold_name(k) == folded)?
        .clone();
    Some(Leader { name, sales: count })
}
