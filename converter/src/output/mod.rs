//! INI inventory serialization.
//!
//! # Output Format
//!
//! ```text
//! [web_app_us_east_prod_dc1]            ← detailed groups, first-seen order
//! host01 region=us_east env=prod location=dc1
//!
//! [prod:children]                       ← env, region, location blocks,
//! web_app_eu_west_prod_dc2                 sorted by key then by member
//! web_app_us_east_prod_dc1
//!
//! ```
//!
//! Every block, the last one included, ends with one blank line.

use std::io::{self, Write};

use crate::models::{AttributeIndex, Inventory, CHILDREN};

/// Write the whole inventory: detailed groups, then env, region and location
/// children blocks.
pub fn write_inventory<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    write_detailed(out, inventory)?;
    for index in inventory.indices() {
        write_children(out, CHILDREN, index)?;
    }
    Ok(())
}

/// Render the inventory into a string.
pub fn render_inventory(inventory: &Inventory) -> io::Result<String> {
    let mut buf = Vec::new();
    write_inventory(&mut buf, inventory)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_detailed<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    for (group, hosts) in &inventory.detailed {
        writeln!(out, "[{}]", group)?;
        for host in hosts {
            writeln!(out, "{}", host)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write blocks like:
///
/// ```text
/// [<key>:<group_type>]
/// <group_detailed_1>
/// <group_detailed_2>
/// ```
fn write_children<W: Write>(out: &mut W, group_type: &str, index: &AttributeIndex) -> io::Result<()> {
    for (key, groups) in index {
        writeln!(out, "[{}:{}]", key, group_type)?;
        for group in groups {
            writeln!(out, "{}", group)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
