//! CSV output formatting.

use serde::Serialize;
use std::io::{self, Write};

/// Write flat records as CSV with a header row taken from the field names.
pub fn write_csv<T: Serialize>(out: impl Write, records: &[T]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for record in records {
        wtr.serialize(record).map_err(io::Error::other)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Employee;

    #[test]
    fn test_write_csv_header_and_rows() {
        let rows = vec![Employee::new("Anna", "Seller", "123", "a@x.kz")];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "name,position,phone,email\nAnna,Seller,123,a@x.kz\n"
        );
    }
}
