//! Bookstore record operations.

use super::model::{Book, BookSale, BookstoreData};
use crate::employee::Employee;
use crate::error::{RecordError, RecordResult, StorageResult};
use crate::storage::JsonStore;
use crate::types::{title_case, SaleDate};
use tracing::{info, warn};

/// Employees, books and sales of one bookstore.
pub struct Bookstore {
    store: JsonStore<BookstoreData>,
}

impl Bookstore {
    pub fn new(store: JsonStore<BookstoreData>) -> Self {
        Self { store }
    }

    /// Add an employee. Name and position are stored title-cased.
    pub fn add_employee(
        &mut self,
        name: &str,
        position: &str,
        phone: &str,
        email: &str,
    ) -> StorageResult<Employee> {
        let employee = Employee::new(
            title_case(name),
            title_case(position),
            phone.trim(),
            email.trim(),
        );
        let added = employee.clone();
        self.store.mutate(|d| d.employees.push(employee))?;
        info!(name = %added.name, "employee added");
        Ok(added)
    }

    /// Add a book. Title, author and genre are stored title-cased.
    pub fn add_book(
        &mut self,
        title: &str,
        year: &str,
        author: &str,
        genre: &str,
        cost: f64,
        price: f64,
    ) -> StorageResult<Book> {
        let book = Book {
            title: title_case(title),
            year: year.trim().to_string(),
            author: title_case(author),
            genre: title_case(genre),
            cost,
            price,
        };
        let added = book.clone();
        self.store.mutate(|d| d.books.push(book))?;
        info!(title = %added.title, "book added");
        Ok(added)
    }

    /// Record a sale dated today.
    ///
    /// Employee and book are looked up case-insensitively; the first match wins.
    pub fn record_sale(
        &mut self,
        employee_name: &str,
        book_title: &str,
        sale_price: f64,
    ) -> RecordResult<BookSale> {
        self.record_sale_on(employee_name, book_title, sale_price, SaleDate::today())
    }

    /// Record a sale on an explicit date.
    pub fn record_sale_on(
        &mut self,
        employee_name: &str,
        book_title: &str,
        sale_price: f64,
        date: SaleDate,
    ) -> RecordResult<BookSale> {
        let data = self.store.doc();

        let employee = data
            .employees
            .iter()
            .find(|e| e.is_named(employee_name))
            .ok_or_else(|| {
                warn!(employee = employee_name, "sale rejected: unknown employee");
                RecordError::not_found("employee", employee_name.trim())
            })?;
        let book = data
            .books
            .iter()
            .find(|b| b.is_titled(book_title))
            .ok_or_else(|| {
                warn!(book = book_title, "sale rejected: unknown book");
                RecordError::not_found("book", book_title.trim())
            })?;

        let sale = BookSale {
            employee: employee.name.clone(),
            book: book.title.clone(),
            date,
            sale_price,
            profit: sale_price - book.cost,
        };
        let recorded = sale.clone();
        self.store.mutate(|d| d.sales.push(sale))?;
        info!(employee = %recorded.employee, book = %recorded.book, "sale recorded");
        Ok(recorded)
    }

    /// Sum of profit over all sales.
    pub fn total_profit(&self) -> f64 {
        self.store.doc().sales.iter().map(|s| s.profit).sum()
    }

    pub fn sales(&self) -> &[BookSale] {
        &self.store.doc().sales
    }

    pub fn employees(&self) -> &[Employee] {
        &self.store.doc().employees
    }

    pub fn books(&self) -> &[Book] {
        &self.store.doc().books
    }

    pub fn data(&self) -> &BookstoreData {
        self.store.doc()
    }

    /// Flush and release the backing store.
    pub fn close(self) -> StorageResult<()> {
        self.store.close()
    }
}
