//! # csv2ini - CSV host lists to Ansible INI inventories
//!
//! Reads a CSV of `PRODUCT, REGION, ENV, LOCATION, HOSTNAME` rows and writes
//! an INI inventory with one group per product/region/env/location tuple plus
//! `:children` groups per environment, region and location.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Grouper   │────▶│  INI text   │
//! │   (UTF-8)   │     │ (col check) │     │ (normalize) │     │  (sorted)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use csv2ini::{convert_reader, Config};
//!
//! let csv = "PRODUCT,REGION,ENV,LOCATION,HOSTNAME\nWeb App, US-East, prod, dc1, host01\n";
//! let conversion = convert_reader(csv.as_bytes(), &Config::default()).unwrap();
//! assert!(conversion.text.starts_with("[web_app_us_east_prod_dc1]\n"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and exit codes
//! - [`config`] - Environment configuration
//! - [`logs`] - Diagnostic logging on stderr
//! - [`models`] - Domain models (HostRow, Inventory)
//! - [`parser`] - CSV reading with required-column check
//! - [`transform`] - Normalization, grouping, and pipeline
//! - [`output`] - INI serialization

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Serialization
pub mod output;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::Config;

pub use error::{
    ConfigError,
    ConvertError,
    ConvertResult,
    CsvError,
    SchemaError,
};

pub use models::{AttributeIndex, HostRow, Inventory, KeyStyle, REQUIRED_COLUMNS};

pub use parser::{read_rows, CsvRow, HostReader};

pub use transform::{
    build_group_name,
    convert_file,
    convert_reader,
    group_rows,
    normalize_token,
    Conversion,
    ConversionStats,
};

pub use output::{render_inventory, write_inventory};
