//! # Validation Module
//!
//! Two kinds of checks live here, and they run at different times.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input boundary (BillConfig::from_json, CLI)                  │
//! │  ├── ids non-empty and unique                                          │
//! │  ├── prices / charges >= 0, quantity >= 1                              │
//! │  └── → ValidationError, the engine never runs                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine step 1 (compute)                                      │
//! │  ├── every item has at least one sharer                                │
//! │  └── → SplitError::UnassignedItems, nothing else is computed           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::money::Money;
//! use tabsplit_core::validation::{validate_price_cents, validate_quantity};
//!
//! validate_price_cents("price", Money::from_cents(1099)).unwrap();
//! validate_quantity(2).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Assignments, BillConfig, Item, ItemId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Engine Check
// =============================================================================

/// Returns the ids of items nobody shares, in item-list order.
///
/// An item is unassigned when it has no entry in `assignments` or its
/// entry is an empty list. A zero-price item still needs an assignment.
pub fn find_unassigned_items(items: &[Item], assignments: &Assignments) -> Vec<ItemId> {
    items
        .iter()
        .filter(|item| {
            assignments
                .get(&item.id)
                .map_or(true, |people| people.is_empty())
        })
        .map(|item| item.id.clone())
        .collect()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, comped dishes)
pub fn validate_price_cents(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tip or tax amount in cents (>= 0).
pub fn validate_charge_cents(field: &str, amount: Money) -> ValidationResult<()> {
    validate_price_cents(field, amount)
}

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates that an id is present (not blank).
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates that every id in `ids` is present and appears once.
fn validate_unique_ids<'a>(
    field: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        validate_id(field, id)?;
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Bill Validator
// =============================================================================

/// Validates a whole bill at the input boundary.
///
/// Stops at the first violation. Assignment contents are not checked:
/// unassigned items are the engine's to report, and stale person ids are
/// tolerated.
pub fn validate_bill_config(config: &BillConfig) -> ValidationResult<()> {
    validate_unique_ids("person id", config.people.iter().map(|p| p.id.as_str()))?;
    validate_unique_ids("item id", config.items.iter().map(|i| i.id.as_str()))?;

    let too_large = |field: &str| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    };

    // Per-person sums can reach the whole bill, so the bill must fit in i64.
    let mut bill_total: i64 = 0;
    for item in &config.items {
        validate_price_cents("price", item.price_cents)?;
        validate_quantity(item.quantity)?;
        let line = item
            .price_cents
            .checked_mul_quantity(item.quantity)
            .ok_or_else(|| too_large("line total"))?;
        bill_total = bill_total
            .checked_add(line.cents())
            .ok_or_else(|| too_large("bill total"))?;
    }

    validate_charge_cents("tip", config.tip.amount_cents)?;
    validate_charge_cents("tax", config.tax.amount_cents)?;
    bill_total
        .checked_add(config.tip.amount_cents.cents())
        .and_then(|total| total.checked_add(config.tax.amount_cents.cents()))
        .ok_or_else(|| too_large("bill total"))?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
