//! csv2ini CLI - Convert a CSV host list to an Ansible INI inventory
//!
//! ```bash
//! csv2ini hosts.csv > inventory.ini
//! CSV2INI_LOG=info csv2ini hosts.csv    # diagnostics on stderr
//! ```
//!
//! Exit codes: `0` success, `1` file not found, `2` any other failure.

use clap::Parser;
use csv2ini::{convert_file, logs, Config, ConvertError, ConvertResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csv2ini", version)]
#[command(
    about = "Convert CSV to Ansible INI inventory, adding *children* groups for env, region and location.",
    long_about = None
)]
struct Cli {
    /// Path to csv file
    csv_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.csv_file) {
        eprintln!("ERROR: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(csv_file: &Path) -> ConvertResult<()> {
    if !csv_file.is_file() {
        return Err(ConvertError::Path(csv_file.to_path_buf()));
    }

    let config = Config::from_env()?;
    logs::init(config.log_level);

    let conversion = convert_file(csv_file, &config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(conversion.text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(ConvertError::Write)?;

    Ok(())
}
