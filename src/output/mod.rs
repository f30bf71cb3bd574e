//! Output formatting module.
//!
//! Provides styled status lines, pretty JSON listings and CSV export.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{
    format_amount, print_error, print_success, print_warning, write_error, write_heading,
    write_info, write_success, write_warning,
};
