//! Export subcommand implementation.
//!
//! Handles `tally export <program> <collection>` for dumping records without
//! starting an interactive session.

use super::{open_store, Program};
use crate::apartments::BuildingData;
use crate::bookstore::BookstoreData;
use crate::config::AppSettings;
use crate::dealership::DealershipData;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Export records from a program's data file.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Program whose data file to read
    #[arg(value_enum)]
    pub program: Program,

    /// Collection to export
    #[arg(value_enum)]
    pub collection: Collection,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

/// Record collections that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// Employees (bookstore, dealer)
    Employees,
    /// Books (bookstore) or cars (dealer)
    Items,
    /// Sales (bookstore, dealer)
    Sales,
    /// Apartments (apartments)
    Apartments,
    /// Residents with their apartment (apartments)
    Residents,
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// CSV with a header row
    Csv,
}

/// One resident per row, flattened with its apartment.
#[derive(Debug, Serialize)]
struct ResidentRow<'a> {
    apartment: u32,
    floor: u32,
    category: &'a str,
    full_name: &'a str,
    years_old: u32,
}

/// Apartment without its residents, for flat output.
#[derive(Debug, Serialize)]
struct ApartmentRow<'a> {
    num: u32,
    lvl: u32,
    category: &'a str,
    residents: usize,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        file: Option<&Path>,
        reset_corrupt: bool,
        quiet: bool,
    ) -> CliResult<()> {
        let mut buf = Vec::new();

        match self.program {
            Program::Bookstore => {
                let store =
                    open_store::<BookstoreData>(settings, file, reset_corrupt, quiet)?;
                let data = store.doc();
                match self.collection {
                    Collection::Employees => self.render(&mut buf, &data.employees)?,
                    Collection::Items => self.render(&mut buf, &data.books)?,
                    Collection::Sales => self.render(&mut buf, &data.sales)?,
                    other => return Err(unsupported(self.program, other)),
                }
            }
            Program::Dealer => {
                let store =
                    open_store::<DealershipData>(settings, file, reset_corrupt, quiet)?;
                let data = store.doc();
                match self.collection {
                    Collection::Employees => self.render(&mut buf, &data.employees)?,
                    Collection::Items => self.render(&mut buf, &data.cars)?,
                    Collection::Sales => self.render(&mut buf, &data.sales)?,
                    other => return Err(unsupported(self.program, other)),
                }
            }
            Program::Apartments => {
                let store = open_store::<BuildingData>(settings, file, reset_corrupt, quiet)?;
                let units = &store.doc().units;
                match (self.collection, self.format) {
                    (Collection::Apartments, ExportFormat::Json) => {
                        let apartments: Vec<_> = units.values().collect();
                        self.render(&mut buf, &apartments)?
                    }
                    (Collection::Apartments, ExportFormat::Csv) => {
                        let rows: Vec<_> = units
                            .values()
                            .map(|a| ApartmentRow {
                                num: a.num,
                                lvl: a.lvl,
                                category: &a.category,
                                residents: a.occupants.len(),
                            })
                            .collect();
                        self.render(&mut buf, &rows)?
                    }
                    (Collection::Residents, _) => {
                        let rows: Vec<_> = units
                            .values()
                            .flat_map(|a| {
                                a.occupants.iter().map(move |r| ResidentRow {
                                    apartment: a.num,
                                    floor: a.lvl,
                                    category: &a.category,
                                    full_name: &r.full_name,
                                    years_old: r.years_old,
                                })
                            })
                            .collect();
                        self.render(&mut buf, &rows)?
                    }
                    (other, _) => return Err(unsupported(self.program, other)),
                }
            }
        }

        match &self.output_file {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(&buf)?;
                if !quiet {
                    output::print_success(&format!("Exported to {}", path.display()));
                }
            }
            None => io::stdout().write_all(&buf)?,
        }

        Ok(())
    }

    fn render<T: Serialize>(&self, out: &mut Vec<u8>, records: &[T]) -> io::Result<()> {
        match self.format {
            ExportFormat::Json => output::write_json(out, records),
            ExportFormat::Csv => output::write_csv(out, records),
        }
    }
}

fn unsupported(program: Program, collection: Collection) -> CliError {
    CliError::Other(format!("{:?} has no {:?} collection", program, collection).to_lowercase())
}
