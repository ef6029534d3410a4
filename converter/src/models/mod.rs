//! Domain models for the inventory conversion.
//!
//! - [`HostRow`] - one CSV record
//! - [`KeyStyle`] - how grouping keys are normalized
//! - [`Inventory`] - detailed groups plus the three attribute indices

use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// Columns every input CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["PRODUCT", "REGION", "ENV", "LOCATION", "HOSTNAME"];

/// Group type written in aggregate block headers, e.g. `[prod:children]`.
pub const CHILDREN: &str = "children";

// =============================================================================
// HostRow
// =============================================================================

/// One input record: the PRODUCT, REGION, ENV, LOCATION and HOSTNAME cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRow {
    pub product: String,
    pub region: String,
    pub env: String,
    pub location: String,
    pub hostname: String,
}

impl HostRow {
    pub fn new(
        product: impl Into<String>,
        region: impl Into<String>,
        env: impl Into<String>,
        location: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            region: region.into(),
            env: env.into(),
            location: location.into(),
            hostname: hostname.into(),
        }
    }
}

// =============================================================================
// KeyStyle
// =============================================================================

/// Normalization applied to REGION, ENV and LOCATION.
///
/// PRODUCT is always fully normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStyle {
    /// Full token normalization for all four key fields
    #[default]
    Full,
    /// Trim and lowercase only, keeping inner punctuation and spaces
    Legacy,
}

// =============================================================================
// Inventory
// =============================================================================

/// Attribute value -> detailed group names containing it.
///
/// Keys and members iterate in ascending order.
pub type AttributeIndex = BTreeMap<String, BTreeSet<String>>;

/// Grouped hosts, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Group name -> host lines, in first-seen group order
    pub detailed: IndexMap<String, Vec<String>>,
    pub by_env: AttributeIndex,
    pub by_region: AttributeIndex,
    pub by_location: AttributeIndex,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a host line to `group`, registering the group in every index.
    pub fn add_host(&mut self, group: &str, env: &str, region: &str, location: &str, host_line: String) {
        self.detailed
            .entry(group.to_string())
            .or_default()
            .push(host_line);

        for (index, key) in [
            (&mut self.by_env, env),
            (&mut self.by_region, region),
            (&mut self.by_location, location),
        ] {
            index
                .entry(key.to_string())
                .or_default()
                .insert(group.to_string());
        }
    }

    /// Number of detailed groups
    pub fn group_count(&self) -> usize {
        self.detailed.len()
    }

    /// Total number of host lines across all groups
    pub fn host_count(&self) -> usize {
        self.detailed.values().map(Vec::len).sum()
    }

    /// Attribute indices in output order: env, region, location
    pub fn indices(&self) -> [&AttributeIndex; 3] {
        [&self.by_env, &self.by_region, &self.by_location]
    }

    pub fn is_empty(&self) -> bool {
        self.detailed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_host_registers_indices() {
        let mut inv = Inventory::new();
        inv.add_host("a_r_prod_dc1", "prod", "r", "dc1", "h1".into());
        inv.add_host("a_r_prod_dc1", "prod", "r", "dc1", "h2".into());

        assert_eq!(inv.group_count(), 1);
        assert_eq!(inv.host_count(), 2);
        assert_eq!(inv.by_env["prod"].len(), 1);
        assert!(inv.by_region["r"].contains("a_r_prod_dc1"));
        assert!(inv.by_location["dc1"].contains("a_r_prod_dc1"));
    }

    #[test]
    fn test_detailed_keeps_insertion_order() {
        let mut inv = Inventory::new();
        inv.add_host("zeta", "e", "r", "l", "h1".into());
        inv.add_host("alpha", "e", "r", "l", "h2".into());
        inv.add_host("zeta", "e", "r", "l", "h3".into());

        let names: Vec<&String> = inv.detailed.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(inv.detailed["zeta"], vec!["h1", "h3"]);
    }
}
