use log::info;
use std::error::Error;
use std::io::{Read, Write};
use std::path::Path;

use crate::{
    csv_utils::{read_csv, records_from_reader, write_csv},
    dto::{AccountRecord, LabelledAccountRow, ProductRow},
    Catalog,
};

/// Labels a provider account export and writes the result to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to a CSV file with `id,type,subtype` columns
/// * `writer` - Where to write the labelled rows (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    label_records(read_csv::<AccountRecord, _>(input_path)?, writer)
}

/// Same as [`run`], reading the export from `reader` (e.g. stdin).
pub fn run_reader<R, W>(reader: R, writer: W) -> Result<(), Box<dyn Error>>
where
    R: Read,
    W: Write,
{
    label_records(records_from_reader::<AccountRecord, _>(reader), writer)
}

fn label_records<W: Write>(
    records: impl Iterator<Item = csv::Result<AccountRecord>>,
    writer: W,
) -> Result<(), Box<dyn Error>> {
    let mut rows = Vec::new();
    for record in records {
        // CSV parsing errors are critical - propagate them
        rows.push(LabelledAccountRow::from(record?));
    }
    info!("labelled {} accounts", rows.len());

    write_csv(writer, rows)?;
    Ok(())
}

/// Writes the catalog as flat CSV rows, in catalog order.
pub fn export_catalog<W: Write>(catalog: &Catalog, writer: W) -> Result<(), Box<dyn Error>> {
    write_csv(writer, catalog.iter().map(ProductRow::from))?;
    Ok(())
}
