//! Dealer subcommand: the car dealership menu session.

use super::menu::Menu;
use super::prompt::Prompter;
use crate::dealership::{Car, Dealership};
use crate::employee::Employee;
use crate::error::CliResult;
use crate::output;
use crate::types::{DateRange, SaleDate};
use std::io::{BufRead, Write};

const MENU: Menu<'static> = Menu {
    title: "Car dealership",
    items: &[
        ("1", "Add employee"),
        ("2", "Add car"),
        ("3", "Add sale"),
        ("4", "Sales report for a period"),
        ("5", "Revenue and profit for a period"),
        ("6", "Best seller"),
        ("7", "All employees"),
        ("8", "All cars"),
        ("9", "Best-selling car"),
        ("10", "Sales by employee"),
        ("11", "Delete employee"),
        ("12", "Delete car"),
        ("13", "Delete sale"),
        ("0", "Exit"),
    ],
    exit_key: "0",
};

/// Run the dealership session until the user exits.
pub fn run<R: BufRead, W: Write>(
    shop: &mut Dealership,
    p: &mut Prompter<R, W>,
    currency: &str,
) -> CliResult<()> {
    MENU.run(p, |choice, p| match choice {
        "1" => add_employee(shop, p),
        "2" => add_car(shop, p),
        "3" => add_sale(shop, p),
        "4" => {
            let range = ask_range(p)?;
            output::write_json(p.out(), &shop.sales_in_range(&range))?;
            Ok(())
        }
        "5" => {
            let range = ask_range(p)?;
            let revenue = output::format_amount(shop.total_revenue(&range), currency);
            let profit = output::format_amount(shop.total_profit(&range), currency);
            output::write_info(p.out(), &format!("Revenue for {}: {}", range, revenue))?;
            output::write_info(p.out(), &format!("Profit for {}: {}", range, profit))?;
            Ok(())
        }
        "6" => {
            let range = ask_range(p)?;
            match shop.best_seller(&range) {
                Some(best) => output::write_info(
                    p.out(),
                    &format!("Best seller: {} ({} sales)", best.name, best.sales),
                )?,
                None => output::write_info(p.out(), "No sales in this period.")?,
            }
            Ok(())
        }
        "7" => {
            output::write_json(p.out(), shop.employees())?;
            Ok(())
        }
        "8" => {
            output::write_json(p.out(), shop.cars())?;
            Ok(())
        }
        "9" => {
            let range = ask_range(p)?;
            match shop.best_selling_car(&range) {
                Some(best) => output::write_info(
                    p.out(),
                    &format!("Best-selling car: {} ({} sales)", best.name, best.sales),
                )?,
                None => output::write_info(p.out(), "No sales in this period.")?,
            }
            Ok(())
        }
        "10" => {
            let name = p.ask("Employee full name: ")?;
            output::write_json(p.out(), &shop.sales_by_employee(&name))?;
            Ok(())
        }
        "11" => delete_employee(shop, p),
        "12" => delete_car(shop, p),
        "13" => delete_sale(shop, p),
        _ => Ok(()),
    })
}

fn ask_date<R: BufRead, W: Write>(p: &mut Prompter<R, W>, label: &str) -> CliResult<SaleDate> {
    p.ask_until(label, |s| s.parse::<SaleDate>().map_err(|e| e.to_string()))
}

fn ask_range<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> CliResult<DateRange> {
    let start = ask_date(p, "Start date (YYYY-MM-DD): ")?;
    let end = ask_date(p, "End date (YYYY-MM-DD): ")?;
    Ok(DateRange::new(start, end))
}

fn add_employee<R: BufRead, W: Write>(shop: &mut Dealership, p: &mut Prompter<R, W>) -> CliResult<()> {
    let name = p.ask("Full name: ")?;
    let position = p.ask("Position: ")?;
    let phone = p.ask("Phone: ")?;
    let email = p.ask("Email: ")?;

    shop.add_employee(Employee::new(name.trim(), position.trim(), phone.trim(), email.trim()))?;
    output::write_success(p.out(), "Employee added.")?;
    Ok(())
}

fn add_car<R: BufRead, W: Write>(shop: &mut Dealership, p: &mut Prompter<R, W>) -> CliResult<()> {
    let manufacturer = p.ask("Manufacturer: ")?;
    let year = p.ask("Year: ")?;
    let model = p.ask("Model: ")?;
    let cost_price = p.ask_f64("Cost price: ")?;
    let sale_price = p.ask_f64("Asking price: ")?;

    shop.add_car(Car {
        manufacturer: manufacturer.trim().to_string(),
        year: year.trim().to_string(),
        model: model.trim().to_string(),
        cost_price,
        sale_price,
    })?;
    output::write_success(p.out(), "Car added.")?;
    Ok(())
}

fn add_sale<R: BufRead, W: Write>(shop: &mut Dealership, p: &mut Prompter<R, W>) -> CliResult<()> {
    let employee = p.ask("Seller full name: ")?;
    let model = p.ask("Car model: ")?;
    let date = ask_date(p, "Sale date (YYYY-MM-DD): ")?;
    let real_price = p.ask_f64("Actual sale price: ")?;

    let sale = shop.add_sale(&employee, &model, date, real_price)?;
    if sale.profit.is_none() {
        output::write_warning(
            p.out(),
            &format!("Model {} is not in stock; no profit recorded.", sale.car),
        )?;
    }
    output::write_success(p.out(), "Sale added.")?;
    Ok(())
}

fn delete_employee<R: BufRead, W: Write>(
    shop: &mut Dealership,
    p: &mut Prompter<R, W>,
) -> CliResult<()> {
    let name = p.ask("Full name of employee to delete: ")?;
    match shop.delete_employee(&name)? {
        Some(e) => output::write_success(p.out(), &format!("Employee {} deleted.", e.name))?,
        None => output::write_error(p.out(), "Employee not found.")?,
    }
    Ok(())
}

fn delete_car<R: BufRead, W: Write>(shop: &mut Dealership, p: &mut Prompter<R, W>) -> CliResult<()> {
    let model = p.ask("Model of car to delete: ")?;
    match shop.delete_car(&model)? {
        Some(c) => output::write_success(p.out(), &format!("Car {} deleted.", c.model))?,
        None => output::write_error(p.out(), "Car not found.")?,
    }
    Ok(())
}

fn delete_sale<R: BufRead, W: Write>(shop: &mut Dealership, p: &mut Prompter<R, W>) -> CliResult<()> {
    let employee = p.ask("Seller full name: ")?;
    let model = p.ask("Car model: ")?;
    let date = ask_date(p, "Sale date (YYYY-MM-DD): ")?;

    match shop.delete_sale(&employee, &model, date)? {
        Some(s) => output::write_success(
            p.out(),
            &format!("Sale of {} by {} on {} deleted.", s.car, s.employee, s.date),
        )?,
        None => output::write_error(p.out(), "Sale not found.")?,
    }
    Ok(())
}
