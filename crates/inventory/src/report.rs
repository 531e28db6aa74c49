use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::item::Item;

/// Per-category rollup: item count and summed `quantity * price`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategorySummary {
    pub count: u64,
    pub total_value: f64,
}

/// Category rollups in insertion order of first encounter.
///
/// Display order is part of the report contract, so the pairs live in a
/// `Vec` and serialize as a JSON object with the keys in that order (a
/// plain map type would re-sort them).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, CategorySummary)>);

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<&CategorySummary> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, summary)| summary)
    }

    /// Categories and their rollups, in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySummary)> {
        self.0.iter().map(|(name, summary)| (name.as_str(), summary))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn entry_mut(&mut self, category: &str) -> &mut CategorySummary {
        let idx = match self.0.iter().position(|(name, _)| name == category) {
            Some(idx) => idx,
            None => {
                self.0
                    .push((category.to_owned(), CategorySummary::default()));
                self.0.len() - 1
            }
        };
        &mut self.0[idx].1
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, summary) in &self.0 {
            map.serialize_entry(name, summary)?;
        }
        map.end()
    }
}

/// Aggregate summary over the full current item set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_inventory_value: f64,
    pub categories: CategoryBreakdown,
    pub low_stock_items: Vec<Item>,
}

/// Compute the summary report for a snapshot of the item collection.
///
/// Grouping is exact string equality on `category`; the breakdown keeps the
/// order categories are first seen in `items`, and `low_stock_items`
/// (`quantity <= 0`) keeps the original item order. Deterministic: the same
/// input slice always yields the same report.
pub fn build_report(items: &[Item]) -> Report {
    let mut categories = CategoryBreakdown::default();
    let mut low_stock_items = Vec::new();

    for item in items {
        let value = item.quantity as f64 * item.price;
        let summary = categories.entry_mut(&item.category);
        summary.count += 1;
        summary.total_value += value;

        if item.quantity <= 0 {
            low_stock_items.push(item.clone());
        }
    }

    // Float addition is order-sensitive: re-adding the per-category totals
    // keeps the grand total exactly equal to their sum.
    let total_inventory_value = categories.iter().map(|(_, s)| s.total_value).sum();

    Report {
        total_inventory_value,
        categories,
        low_stock_items,
    }
}

/// Render a report in the tabular export layout.
///
/// Layout: a category header row and one row per category (breakdown order),
/// a blank row, the grand total row, and, only when low-stock items exist,
/// a blank row followed by the low-stock section. Write-only format; there
/// is no parser.
pub fn render_csv(report: &Report) -> String {
    let mut out = String::new();

    push_row(&mut out, &["Category", "Item Count", "Total Value"]);
    for (category, summary) in report.categories.iter() {
        push_row(
            &mut out,
            &[
                category.to_owned(),
                summary.count.to_string(),
                summary.total_value.to_string(),
            ],
        );
    }

    out.push_str("\r\n");
    push_row(
        &mut out,
        &[
            "Total Inventory Value".to_owned(),
            report.total_inventory_value.to_string(),
        ],
    );

    if !report.low_stock_items.is_empty() {
        out.push_str("\r\n");
        push_row(&mut out, &["Low Stock Items"]);
        push_row(&mut out, &["ID", "Name", "Quantity", "Price", "Category"]);
        for item in &report.low_stock_items {
            push_row(
                &mut out,
                &[
                    item.id.to_string(),
                    item.name.clone(),
                    item.quantity.to_string(),
                    item.price.to_string(),
                    item.category.clone(),
                ],
            );
        }
    }

    out
}

/// Append one CRLF-terminated row, quoting fields only when necessary.
fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        push_field(out, field.as_ref());
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    // Minimal quoting: only fields containing a delimiter, quote, or line
    // break are wrapped, with embedded quotes doubled.
    if field.contains(['"', ',', '\r', '\n']) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}
