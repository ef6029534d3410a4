//! High-level API for CSV to INI conversion.
//!
//! Combines reading, grouping and serialization. The whole input is read and
//! grouped before any output is rendered, so a failure never leaves a
//! half-written inventory behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use csv2ini::{convert_file, Config};
//! use std::path::Path;
//!
//! let conversion = convert_file(Path::new("hosts.csv"), &Config::default()).unwrap();
//! print!("{}", conversion.text);
//! ```

use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};
use crate::logs::{log_debug, log_debug_indent, log_info, log_success, log_warning};
use crate::models::Inventory;
use crate::output::render_inventory;
use crate::parser::{open_csv_file, HostReader};
use super::grouper::InventoryBuilder;

/// Counters collected while grouping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Data rows read (blank lines excluded)
    pub rows_read: usize,
    /// Line numbers of rows dropped for a blank hostname
    pub skipped_lines: Vec<u64>,
    /// Detailed groups created
    pub groups: usize,
    /// Host lines written
    pub hosts: usize,
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rendered INI inventory
    pub text: String,
    pub inventory: Inventory,
    pub stats: ConversionStats,
}

/// Convert a CSV file.
///
/// Fails with [`ConvertError::Path`] if `path` is not an existing regular file.
pub fn convert_file(path: &Path, config: &Config) -> ConvertResult<Conversion> {
    if !path.is_file() {
        return Err(ConvertError::Path(path.to_path_buf()));
    }

    log_info(format!("Reading CSV: {}", path.display()));
    // The file handle is dropped when grouping returns, on success or error
    let reader = open_csv_file(path, config.delimiter)?;
    let (inventory, stats) = group_from_reader(reader, config)?;
    finish(inventory, stats)
}

/// Convert CSV read from any byte source.
pub fn convert_reader<R: Read>(source: R, config: &Config) -> ConvertResult<Conversion> {
    let reader = HostReader::new(source, config.delimiter)?;
    let (inventory, stats) = group_from_reader(reader, config)?;
    finish(inventory, stats)
}

/// Group every row of a validated reader.
fn group_from_reader<R: Read>(
    mut reader: HostReader<R>,
    config: &Config,
) -> ConvertResult<(Inventory, ConversionStats)> {
    log_debug(format!("Columns: {}", reader.headers().join(", ")));

    let mut builder = InventoryBuilder::new(config.key_style);
    let mut stats = ConversionStats::default();

    while let Some(csv_row) = reader.next_row()? {
        stats.rows_read += 1;
        match builder.add_row(&csv_row.row) {
            Some(host) => {
                log_debug_indent(format!("line {} → {}", csv_row.line, host.group), 1);
            }
            None => {
                log_warning(format!("Line {}: empty HOSTNAME, row skipped", csv_row.line));
                stats.skipped_lines.push(csv_row.line);
            }
        }
    }

    let inventory = builder.build();
    stats.groups = inventory.group_count();
    stats.hosts = inventory.host_count();

    log_success(format!(
        "Read {} rows ({} skipped)",
        stats.rows_read,
        stats.skipped_lines.len()
    ));
    log_success(format!("{} hosts in {} groups", stats.hosts, stats.groups));

    Ok((inventory, stats))
}

fn finish(inventory: Inventory, stats: ConversionStats) -> ConvertResult<Conversion> {
    let text = render_inventory(&inventory).map_err(ConvertError::Write)?;
    Ok(Conversion { text, inventory, stats })
}
