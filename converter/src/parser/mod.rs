//! CSV reading for host inventories.
//!
//! Wraps the `csv` crate: checks the header for the required columns before
//! any row is decoded, then yields one [`CsvRow`] per record. Spaces after a
//! delimiter are dropped ahead of the parser so quoted fields still open.

mod initial_space;

pub use initial_space::SkipInitialSpace;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult, CsvError, CsvResult, SchemaError};
use crate::models::{HostRow, REQUIRED_COLUMNS};

/// A decoded row with its position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line number where the record starts
    pub line: u64,
    pub row: HostRow,
}

/// Positions of the required columns in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    product: usize,
    region: usize,
    env: usize,
    location: usize,
    hostname: usize,
}

impl ColumnMap {
    /// Resolve required columns, failing with every missing name.
    ///
    /// Names are matched case-sensitively. If a name repeats, the last
    /// occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, SchemaError> {
        let position = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::new(missing));
        }

        let resolve = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            product: resolve("PRODUCT"),
            region: resolve("REGION"),
            env: resolve("ENV"),
            location: resolve("LOCATION"),
            hostname: resolve("HOSTNAME"),
        })
    }

    /// Extract a row. Cells missing from a short record read as empty.
    pub fn row(&self, record: &StringRecord) -> HostRow {
        let cell = |i: usize| record.get(i).unwrap_or("");
        HostRow::new(
            cell(self.product),
            cell(self.region),
            cell(self.env),
            cell(self.location),
            cell(self.hostname),
        )
    }
}

/// Row reader over any byte source, with the header already validated.
pub struct HostReader<R: Read> {
    reader: csv::Reader<SkipInitialSpace<R>>,
    columns: ColumnMap,
    headers: Vec<String>,
    record: StringRecord,
}

impl<R: Read> HostReader<R> {
    /// Read the header and check the required columns.
    ///
    /// Fails with [`ConvertError::Schema`] before any data row is decoded.
    pub fn new(source: R, delimiter: u8) -> ConvertResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(SkipInitialSpace::new(source, delimiter));

        let header_record = reader.headers().map_err(CsvError::from)?.clone();
        let columns = ColumnMap::from_headers(&header_record)?;
        let headers = header_record.iter().map(String::from).collect();

        Ok(Self {
            reader,
            columns,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Column headers as read from the file
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Read the next row, `Ok(None)` at end of input.
    pub fn next_row(&mut self) -> CsvResult<Option<CsvRow>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        Ok(Some(CsvRow {
            line,
            row: self.columns.row(&self.record),
        }))
    }
}

impl<R: Read> Iterator for HostReader<R> {
    type Item = CsvResult<CsvRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

/// Open a CSV file and validate its header.
pub fn open_csv_file(path: &Path, delimiter: u8) -> ConvertResult<HostReader<File>> {
    let file = File::open(path).map_err(|e| ConvertError::Csv(CsvError::Io(e)))?;
    HostReader::new(file, delimiter)
}

/// Read every row from a source.
///
/// # Example
/// ```
/// use csv2ini::parser::read_rows;
///
/// let csv = "PRODUCT,REGION,ENV,LOCATION,HOSTNAME\nWeb, eu, prod, dc1, h1\n";
/// let rows = read_rows(csv.as_bytes(), b',').unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].row.region, "eu");
/// ```
pub fn read_rows<R: Read>(source: R, delimiter: u8) -> ConvertResult<Vec<CsvRow>> {
    let rows = HostReader::new(source, delimiter)?.collect::<CsvResult<Vec<_>>>()?;
    Ok(rows)
}
