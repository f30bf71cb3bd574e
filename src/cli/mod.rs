//! CLI subcommand definitions and handlers.
//!
//! One subcommand per program, each starting an interactive session:
//! - `tally bookstore` - Bookstore sales forms
//! - `tally dealer` - Car dealership menu
//! - `tally apartments` - Apartment registry menu
//! - `tally export <program> <collection>` - Dump records as JSON or CSV

pub mod apartments;
pub mod bookstore;
pub mod dealer;
mod export;
mod menu;
mod prompt;

pub use export::{Collection, ExportCommand, ExportFormat};
pub use menu::Menu;
pub use prompt::{parse_amount, parse_count, Prompter};

use crate::apartments::Building;
use crate::bookstore::Bookstore;
use crate::config::AppSettings;
use crate::dealership::Dealership;
use crate::error::{CliError, CliResult, StorageError, StorageResult};
use crate::output;
use crate::storage::{Document, JsonStore};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Tally - small record-keeping programs backed by JSON files.
///
/// Each program keeps its records in one JSON file in the current directory
/// (`store.json`, `data.json`, `house_data.json`) unless told otherwise.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bookstore, car dealership and apartment record keeping", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data file to use instead of the program's default
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Move an unreadable data file aside and start empty instead of failing
    #[arg(long, global = true)]
    pub reset_corrupt: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record bookstore employees, books and sales
    #[command(alias = "b")]
    Bookstore,

    /// Record car dealership employees, cars and sales
    #[command(alias = "d")]
    Dealer,

    /// Register apartments and their residents
    #[command(alias = "a")]
    Apartments,

    /// Export records as JSON or CSV
    #[command(alias = "e")]
    Export(ExportCommand),
}

/// The three record-keeping programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Program {
    Bookstore,
    Dealer,
    Apartments,
}

impl Cli {
    /// Run the selected subcommand against stdin and stdout.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let file = self.file.as_deref();
        let currency = settings.currency.as_str();

        match &self.command {
            Commands::Bookstore => {
                let store = open_store(settings, file, self.reset_corrupt, self.quiet)?;
                let mut shop = Bookstore::new(store);
                let session = bookstore::run(&mut shop, &mut stdio(), currency);
                finish(session, shop.close())?;
            }
            Commands::Dealer => {
                let store = open_store(settings, file, self.reset_corrupt, self.quiet)?;
                let mut shop = Dealership::new(store);
                let session = dealer::run(&mut shop, &mut stdio(), currency);
                finish(session, shop.close())?;
            }
            Commands::Apartments => {
                let store = open_store(settings, file, self.reset_corrupt, self.quiet)?;
                let mut house = Building::new(store);
                let session = apartments::run(&mut house, &mut stdio());
                finish(session, house.close())?;
            }
            Commands::Export(cmd) => cmd.execute(settings, file, self.reset_corrupt, self.quiet)?,
        }

        Ok(())
    }
}

/// Combine a session's outcome with closing its store.
///
/// The store is closed even when the session failed, so a change whose write
/// failed gets a second attempt. The session error takes precedence.
fn finish(session: CliResult<()>, closed: StorageResult<()>) -> CliResult<()> {
    match (session, closed) {
        (Ok(()), closed) => Ok(closed?),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "store could not be flushed on exit");
            Err(e)
        }
    }
}

fn stdio() -> Prompter<io::StdinLock<'static>, io::Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

/// Open the data file for document `D`.
///
/// A corrupt file is an error unless `reset_corrupt` is set, in which case it
/// is moved aside and the user is warned.
pub fn open_store<D: Document>(
    settings: &AppSettings,
    file: Option<&Path>,
    reset_corrupt: bool,
    quiet: bool,
) -> CliResult<JsonStore<D>> {
    let path = settings.data_file::<D>(file);

    if !reset_corrupt {
        return JsonStore::open(&path).map_err(|e| match e {
            StorageError::Corrupt { .. } => CliError::Other(format!(
                "{}; rerun with --reset-corrupt to move it aside and start empty",
                e
            )),
            other => other.into(),
        });
    }

    let (store, moved) = JsonStore::open_or_reset(&path)?;
    if let Some(moved) = moved {
        if !quiet {
            output::print_warning(&format!(
                "{} could not be read and was moved to {}; starting empty.",
                path.display(),
                moved.display()
            ));
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dealership::DealershipData;
    use crate::employee::Employee;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["tally", "dealer", "--file", "cars.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Dealer));
        assert_eq!(cli.file, Some(PathBuf::from("cars.json")));

        let cli = Cli::try_parse_from(["tally", "-v", "apartments"]).unwrap();
        assert!(matches!(cli.command, Commands::Apartments));
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["tally"]).is_err());
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "tally", "export", "dealer", "sales", "-f", "csv", "-o", "sales.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Export(cmd) => {
                assert_eq!(cmd.program, Program::Dealer);
                assert_eq!(cmd.collection, Collection::Sales);
                assert_eq!(cmd.format, ExportFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn write_failure() -> StorageError {
        StorageError::WriteFailed {
            path: PathBuf::from("data.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
    }

    #[test]
    fn test_finish_reports_close_failure() {
        let err = finish(Ok(()), Err(write_failure())).unwrap_err();
        assert!(matches!(err, CliError::Storage(StorageError::WriteFailed { .. })));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_keeps_session_error() {
        let err = finish(Err(write_failure().into()), Ok(())).unwrap_err();
        assert!(matches!(err, CliError::Storage(StorageError::WriteFailed { .. })));

        let err = finish(Err(CliError::InputClosed), Err(write_failure())).unwrap_err();
        assert!(matches!(err, CliError::InputClosed));
    }

    #[test]
    fn test_session_failure_still_flushes_store() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("later");
        let path = nested.join("data.json");

        let mut shop = Dealership::new(JsonStore::open(&path).unwrap());
        let session = shop
            .add_employee(Employee::new("Anna", "Seller", "", ""))
            .map_err(CliError::from);
        assert!(session.is_err());

        fs::create_dir(&nested).unwrap();
        assert!(finish(session, shop.close()).is_err());

        let reopened = Dealership::new(JsonStore::open(&path).unwrap());
        assert_eq!(reopened.employees()[0].name, "Anna");
    }

    #[test]
    fn test_open_store_corrupt_needs_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "garbage").unwrap();
        let settings = AppSettings::default();

        let err = open_store::<DealershipData>(&settings, Some(&path), false, true).unwrap_err();
        assert!(err.to_string().contains("--reset-corrupt"));
        assert!(path.exists());

        let store = open_store::<DealershipData>(&settings, Some(&path), true, true).unwrap();
        assert!(store.doc().sales.is_empty());
        assert!(dir.path().join("data.json.corrupt").exists());
    }
}
