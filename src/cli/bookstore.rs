//! Bookstore subcommand: a form-driven session.
//!
//! Each form is filled in one field at a time. A field that fails validation
//! cancels the whole form; the user starts it again from the menu.

use super::menu::Menu;
use super::prompt::{parse_amount, Prompter};
use crate::bookstore::Bookstore;
use crate::error::CliResult;
use crate::output;
use std::io::{BufRead, Write};

const MENU: Menu<'static> = Menu {
    title: "Bookstore sales",
    items: &[
        ("1", "Add employee"),
        ("2", "Add book"),
        ("3", "Record sale"),
        ("4", "Total profit"),
        ("5", "Show sales"),
        ("0", "Exit"),
    ],
    exit_key: "0",
};

/// Run the bookstore session until the user exits.
pub fn run<R: BufRead, W: Write>(
    shop: &mut Bookstore,
    p: &mut Prompter<R, W>,
    currency: &str,
) -> CliResult<()> {
    show_sales(shop, p, currency)?;

    MENU.run(p, |choice, p| match choice {
        "1" => add_employee(shop, p),
        "2" => add_book(shop, p),
        "3" => record_sale(shop, p, currency),
        "4" => {
            let profit = output::format_amount(shop.total_profit(), currency);
            output::write_info(p.out(), &format!("Total profit: {}", profit))?;
            Ok(())
        }
        "5" => show_sales(shop, p, currency),
        _ => Ok(()),
    })
}

fn add_employee<R: BufRead, W: Write>(shop: &mut Bookstore, p: &mut Prompter<R, W>) -> CliResult<()> {
    output::write_heading(p.out(), "Add employee")?;
    let name = p.ask("Full name: ")?;
    let position = p.ask("Position: ")?;
    let phone = p.ask("Phone: ")?;
    let email = p.ask("Email: ")?;

    if name.trim().is_empty() {
        output::write_error(p.out(), "Full name is required.")?;
        return Ok(());
    }

    let employee = shop.add_employee(&name, &position, &phone, &email)?;
    output::write_success(p.out(), &format!("Employee {} added.", employee.name))?;
    Ok(())
}

fn add_book<R: BufRead, W: Write>(shop: &mut Bookstore, p: &mut Prompter<R, W>) -> CliResult<()> {
    output::write_heading(p.out(), "Add book")?;
    let title = p.ask("Title: ")?;
    let year = p.ask("Year: ")?;
    let author = p.ask("Author: ")?;
    let genre = p.ask("Genre: ")?;
    let cost = p.ask("Cost price: ")?;
    let price = p.ask("Sale price: ")?;

    if title.trim().is_empty() {
        output::write_error(p.out(), "Title is required.")?;
        return Ok(());
    }

    let year = year.trim();
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        output::write_error(p.out(), "Publication year must contain digits only.")?;
        return Ok(());
    }

    let (cost, price) = match (parse_amount(&cost), parse_amount(&price)) {
        (Ok(cost), Ok(price)) => (cost, price),
        _ => {
            output::write_error(p.out(), "Cost price and sale price must be numbers.")?;
            return Ok(());
        }
    };

    let book = shop.add_book(&title, year, &author, &genre, cost, price)?;
    output::write_success(p.out(), &format!("Book {} added.", book.title))?;
    Ok(())
}

fn record_sale<R: BufRead, W: Write>(
    shop: &mut Bookstore,
    p: &mut Prompter<R, W>,
    currency: &str,
) -> CliResult<()> {
    output::write_heading(p.out(), "Record sale")?;
    let employee = p.ask("Employee: ")?;
    let title = p.ask("Book: ")?;
    let price = p.ask("Sale price: ")?;

    let price = match parse_amount(&price) {
        Ok(price) => price,
        Err(msg) => {
            output::write_error(p.out(), &msg)?;
            return Ok(());
        }
    };

    shop.record_sale(&employee, &title, price)?;
    output::write_success(p.out(), "Sale recorded.")?;
    show_sales(shop, p, currency)
}

fn show_sales<R: BufRead, W: Write>(
    shop: &Bookstore,
    p: &mut Prompter<R, W>,
    currency: &str,
) -> CliResult<()> {
    output::write_heading(p.out(), "Sales")?;
    if shop.sales().is_empty() {
        writeln!(p.out(), "No sales yet.")?;
    }
    for sale in shop.sales() {
        writeln!(
            p.out(),
            "{} - {} sold {} for {}",
            sale.date,
            sale.employee,
            sale.book,
            output::format_amount(sale.sale_price, currency)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session(shop: &mut Bookstore, input: &str) -> String {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(shop, &mut p, "тг").unwrap();
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_full_sale_flow() {
        let dir = tempdir().unwrap();
        let mut shop = Bookstore::new(JsonStore::open(dir.path().join("store.json")).unwrap());

        let out = session(
            &mut shop,
            "1\nanna smith\nseller\n555\na@b.c\n\
             2\ndune\n1965\nfrank herbert\nsci-fi\n60\n90\n\
             3\nANNA SMITH\nDUNE\n100\n\
             4\n0\n",
        );

        assert!(out.contains("Employee Anna Smith added."));
        assert!(out.contains("Book Dune added."));
        assert!(out.contains("Anna Smith sold Dune for 100.00 тг"));
        assert!(out.contains("Total profit: 40.00 тг"));
        assert_eq!(shop.sales().len(), 1);
    }

    #[test]
    fn test_bad_year_cancels_form() {
        let dir = tempdir().unwrap();
        let mut shop = Bookstore::new(JsonStore::open(dir.path().join("store.json")).unwrap());

        let out = session(&mut shop, "2\nDune\n19x5\nHerbert\nSci-Fi\n60\n90\n0\n");
        assert!(out.contains("digits only"));
        assert!(shop.books().is_empty());
    }

    #[test]
    fn test_unknown_employee_is_reported() {
        let dir = tempdir().unwrap();
        let mut shop = Bookstore::new(JsonStore::open(dir.path().join("store.json")).unwrap());

        let out = session(&mut shop, "3\nGhost\nDune\n10\n0\n");
        assert!(out.contains("employee 'Ghost' not found"));
        assert!(shop.sales().is_empty());
    }
}
