//! # Summary
//!
//! Plain-text views of a bill and its split, for shells that show or copy
//! them. Every amount shown is a rounded total, i.e. what people pay.
//!
//! ```text
//! Bill Split:
//! - Alice owes $23.50
//! - Bob owes $18.00
//! Total: $41.50 (includes tip + tax)
//! ```

use crate::error::{unassigned_message, SplitError};
use crate::money::Money;
use crate::types::{BillSplit, Item, Person, PersonResult};

/// Name shown for a result row whose person is not in the list.
const UNKNOWN_NAME: &str = "Unknown";

/// Running subtotal of the bill: Σ price × quantity over every item,
/// assigned or not.
pub fn bill_subtotal(items: &[Item]) -> Money {
    items.iter().map(Item::line_total).sum()
}

/// Full breakdown, one line per person, then the grand total.
pub fn format_summary(split: &BillSplit, people: &[Person], symbol: &str) -> String {
    let mut lines = Vec::with_capacity(split.results.len() + 2);
    lines.push("Bill Split:".to_string());

    for result in &split.results {
        let name = people
            .iter()
            .find(|p| p.id == result.person_id)
            .map_or(UNKNOWN_NAME, |p| p.name.as_str());
        lines.push(format!("- {}", format_person_summary(result, name, symbol)));
    }

    lines.push(format!(
        "Total: {} (includes tip + tax)",
        split.grand_total().format_with_symbol(symbol)
    ));

    lines.join("\n")
}

/// One person's line, e.g. `"Alice owes $23.50"`.
pub fn format_person_summary(result: &PersonResult, name: &str, symbol: &str) -> String {
    format!(
        "{} owes {}",
        name,
        result.rounded_total_cents.format_with_symbol(symbol)
    )
}

/// Guidance for a blocked split, naming the items by label.
///
/// `"2 items need assignment: Nachos, Wings"`. Ids with no matching item
/// are shown as-is.
pub fn format_unassigned(error: &SplitError, items: &[Item]) -> String {
    let ids = error.unassigned_item_ids();
    let labels: Vec<&str> = ids
        .iter()
        .map(|id| {
            items
                .iter()
                .find(|item| &item.id == id)
                .map_or(id.as_str(), |item| item.label.as_str())
        })
        .collect();

    format!("{}: {}", unassigned_message(ids.len()), labels.join(", "))
}

// =============================================================================
// Unit Tests
// =============================================================================
