//! Group host rows into detailed groups and attribute indices.
//!
//! # Architecture
//!
//! ```text
//! CSV Input (rows)                          →  Inventory
//! ┌──────────────────────────────────────┐    ┌──────────────────────────────────┐
//! │ Web App, US-East, prod, dc1, host01  │    │ web_app_us_east_prod_dc1         │
//! │ Web App, US-East, prod, dc1, host02  │ →  │   host01 ..., host02 ...         │
//! │ Web App, EU-West, prod, dc2, host03  │    │ web_app_eu_west_prod_dc2         │
//! └──────────────────────────────────────┘    │   host03 ...                     │
//!                                             ├──────────────────────────────────┤
//!                                             │ prod    → {both groups}          │
//!                                             │ us_east → {first}, eu_west → ... │
//!                                             │ dc1     → {first}, dc2 → ...     │
//!                                             └──────────────────────────────────┘
//! ```

use crate::models::{HostRow, Inventory, KeyStyle};
use super::normalize::{build_group_name, normalize_attribute, normalize_token};

/// Group rows into an [`Inventory`] using full key normalization.
///
/// Rows with a blank hostname are dropped without touching any index.
pub fn group_rows<I>(rows: I) -> Inventory
where
    I: IntoIterator<Item = HostRow>,
{
    group_rows_with_style(rows, KeyStyle::Full)
}

/// Group rows into an [`Inventory`] with the given attribute key style.
pub fn group_rows_with_style<I>(rows: I, style: KeyStyle) -> Inventory
where
    I: IntoIterator<Item = HostRow>,
{
    let mut builder = InventoryBuilder::new(style);
    for row in rows {
        builder.add_row(&row);
    }
    builder.build()
}

/// Normalized keys and host line for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedHost {
    pub group: String,
    pub region: String,
    pub env: String,
    pub location: String,
    pub host_line: String,
}

impl GroupedHost {
    /// Normalize a row. Returns `None` when the hostname is blank.
    pub fn from_row(row: &HostRow, style: KeyStyle) -> Option<Self> {
        let hostname = row.hostname.trim();
        if hostname.is_empty() {
            return None;
        }

        let product = normalize_token(&row.product);
        let region = normalize_attribute(&row.region, style);
        let env = normalize_attribute(&row.env, style);
        let location = normalize_attribute(&row.location, style);

        let group = build_group_name(&product, &region, &env, &location);
        let host_line = format!(
            "{} region={} env={} location={}",
            hostname, region, env, location
        );

        Some(Self { group, region, env, location, host_line })
    }
}

/// Builder for accumulating rows while grouping.
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    style: KeyStyle,
    inventory: Inventory,
}

impl InventoryBuilder {
    pub fn new(style: KeyStyle) -> Self {
        Self { style, inventory: Inventory::new() }
    }

    /// Add one row. Returns the grouped host, or `None` if the row was skipped.
    pub fn add_row(&mut self, row: &HostRow) -> Option<GroupedHost> {
        let host = GroupedHost::from_row(row, self.style)?;
        self.inventory.add_host(
            &host.group,
            &host.env,
            &host.region,
            &host.location,
            host.host_line.clone(),
        );
        Some(host)
    }

    pub fn build(self) -> Inventory {
        self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<HostRow> {
        vec![
            HostRow::new("Web App", " US-East", " prod", " dc1", " host01"),
            HostRow::new("Web App", " US-East", " prod", " dc1", " host02"),
            HostRow::new("Web App", " EU-West", " prod", " dc2", " host03"),
        ]
    }

    #[test]
    fn test_detailed_groups() {
        let inv = group_rows(sample_rows());

        assert_eq!(inv.group_count(), 2);
        assert_eq!(
            inv.detailed["web_app_us_east_prod_dc1"],
            vec![
                "host01 region=us_east env=prod location=dc1",
                "host02 region=us_east env=prod location=dc1",
            ]
        );
        assert_eq!(
            inv.detailed["web_app_eu_west_prod_dc2"],
            vec!["host03 region=eu_west env=prod location=dc2"]
        );
    }

    #[test]
    fn test_attribute_indices() {
        let inv = group_rows(sample_rows());

        let prod: Vec<&String> = inv.by_env["prod"].iter().collect();
        assert_eq!(prod, vec!["web_app_eu_west_prod_dc2", "web_app_us_east_prod_dc1"]);
        assert_eq!(inv.by_region.len(), 2);
        assert!(inv.by_region["us_east"].contains("web_app_us_east_prod_dc1"));
        assert!(inv.by_location["dc2"].contains("web_app_eu_west_prod_dc2"));
    }

    #[test]
    fn test_blank_hostname_skipped() {
        let rows = vec![
            HostRow::new("Db", "eu", "dev", "dc9", "   "),
            HostRow::new("Db", "eu", "dev", "dc9", ""),
        ];
        let inv = group_rows(rows);

        assert!(inv.is_empty());
        assert!(inv.by_env.is_empty());
        assert!(inv.by_region.is_empty());
        assert!(inv.by_location.is_empty());
    }

    #[test]
    fn test_blank_hostname_with_existing_group() {
        let rows = vec![
            HostRow::new("Db", "eu", "dev", "dc9", "db01"),
            HostRow::new("Db", "eu", "dev", "dc9", "  "),
        ];
        let inv = group_rows(rows);

        assert_eq!(inv.host_count(), 1);
        assert_eq!(inv.detailed["db_eu_dev_dc9"], vec!["db01 region=eu env=dev location=dc9"]);
    }

    #[test]
    fn test_indices_match_detailed_groups() {
        let mut rows = sample_rows();
        rows.push(HostRow::new("API", "US-East", "Staging", "dc1", "api01"));
        rows.push(HostRow::new("API", "US-East", "Staging", "dc1", ""));
        let inv = group_rows(rows);

        for index in inv.indices() {
            let mut names: Vec<&String> = index.values().flatten().collect();
            names.sort();
            names.dedup();
            let mut detailed: Vec<&String> = inv.detailed.keys().collect();
            detailed.sort();
            assert_eq!(names, detailed);
        }
    }

    #[test]
    fn test_colliding_tuples_share_group() {
        let rows = vec![
            HostRow::new("web app", "us east", "prod", "dc1", "a"),
            HostRow::new("Web-App", "US_East", "PROD", "DC1", "b"),
        ];
        let inv = group_rows(rows);

        assert_eq!(inv.group_count(), 1);
        assert_eq!(inv.host_count(), 2);
    }

    #[test]
    fn test_hostname_kept_raw() {
        let rows = vec![HostRow::new("p", "r", "e", "l", "  Host-01.Example.com ")];
        let inv = group_rows(rows);

        assert_eq!(
            inv.detailed["p_r_e_l"],
            vec!["Host-01.Example.com region=r env=e location=l"]
        );
    }

    #[test]
    fn test_legacy_style() {
        let rows = vec![HostRow::new("Web App", " US-East ", "Prod", "DC 1", "h1")];
        let inv = group_rows_with_style(rows, KeyStyle::Legacy);

        assert!(inv.detailed.contains_key("web_app_us-east_prod_dc 1"));
        assert!(inv.by_location.contains_key("dc 1"));
    }

    #[test]
    fn test_builder_reports_skips() {
        let mut builder = InventoryBuilder::new(KeyStyle::Full);
        assert!(builder.add_row(&HostRow::new("p", "r", "e", "l", " ")).is_none());

        let host = builder.add_row(&HostRow::new("p", "r", "e", "l", "h")).unwrap();
        assert_eq!(host.group, "p_r_e_l");
        assert_eq!(builder.build().host_count(), 1);
    }
}
