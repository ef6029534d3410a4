//! Transformation module.
//!
//! - Normalize: grouping-key normalization
//! - Grouper: rows to detailed groups and attribute indices
//! - Pipeline: reading, grouping and rendering in one call

pub mod grouper;
pub mod normalize;
pub mod pipeline;

pub use grouper::{group_rows, group_rows_with_style, GroupedHost, InventoryBuilder};
pub use normalize::{build_group_name, normalize_attribute, normalize_token};
pub use pipeline::*;
