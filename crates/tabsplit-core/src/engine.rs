//! # Split Engine
//!
//! The primary entry point: [`compute`] turns a [`BillConfig`] into a
//! per-person breakdown, or fails with the list of unassigned items.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BillConfig                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. validate ──── unassigned items? ──► Err(UnassignedItems)           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  2. distribute_items ─────────────────► food map                       │
//! │      │                                      │                           │
//! │      ├──► 3. distribute_charge(tip) ◄───────┤                           │
//! │      └──► 4. distribute_charge(tax) ◄───────┘  (tip and tax never      │
//! │      │                                          see each other)        │
//! │      ▼                                                                  │
//! │  5. per person: exact = food + tip + tax, rounded = ⌈exact⌉            │
//! │  6. total surplus = Σ (rounded - exact)                                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Ok(BillSplit)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine holds no state and never mutates its input, so it can be
//! called from any number of threads at once.

use tracing::debug;

use crate::distribute::{distribute_charge, distribute_items, ShareMap};
use crate::error::{SplitError, SplitResult};
use crate::money::Money;
use crate::types::{BillConfig, BillSplit, Person, PersonResult};
use crate::validation::find_unassigned_items;

/// Splits a bill.
///
/// Returns one [`PersonResult`] per person, in people-list order, including
/// people who owe nothing. Fails only when at least one item has nobody
/// assigned, and then reports every such item.
///
/// ## Precondition
/// The whole bill (every line total plus tip plus tax) fits in an `i64`
/// of cents. [`BillConfig::from_json`] enforces this. A bill built in code
/// that breaks it still never panics: per-person sums clamp at
/// `i64::MAX`, so conservation no longer holds for that bill.
///
/// ## Example
/// ```rust
/// use tabsplit_core::{compute, BillConfig, ChargePolicy, Item, Money, Person};
///
/// let alice = Person::new("Alice");
/// let bob = Person::new("Bob");
/// let pizza = Item::new("Pizza", Money::from_cents(1000), 1);
///
/// let mut config = BillConfig {
///     people: vec![alice.clone(), bob.clone()],
///     items: vec![pizza.clone()],
///     tip: ChargePolicy::equal(Money::from_cents(201)),
///     ..BillConfig::default()
/// };
/// config.assign(&pizza.id, [alice.id.clone(), bob.id.clone()]);
///
/// let split = compute(&config).unwrap();
/// assert_eq!(split.results[0].rounded_total_cents, Money::from_cents(601));
/// assert_eq!(split.results[1].rounded_total_cents, Money::from_cents(600));
/// ```
pub fn compute(config: &BillConfig) -> SplitResult<BillSplit> {
    debug!(
        people = config.people.len(),
        items = config.items.len(),
        "Computing split"
    );

    let unassigned = find_unassigned_items(&config.items, &config.assignments);
    if !unassigned.is_empty() {
        debug!(count = unassigned.len(), "Split blocked by unassigned items");
        return Err(SplitError::UnassignedItems {
            item_ids: unassigned,
        });
    }

    let food = distribute_items(&config.items, &config.assignments, &config.people);
    let tip = distribute_charge(&config.tip, &config.people, &food);
    let tax = distribute_charge(&config.tax, &config.people, &food);

    let results: Vec<PersonResult> = config
        .people
        .iter()
        .map(|person| person_result(person, &food, &tip, &tax))
        .collect();
    let total_surplus_cents = results.iter().map(|r| r.surplus_cents).sum();

    debug!(
        tip = %config.tip.amount_cents,
        tax = %config.tax.amount_cents,
        surplus = %total_surplus_cents,
        "Split computed"
    );

    Ok(BillSplit {
        results,
        total_surplus_cents,
    })
}

/// Builds one person's row from the three distribution maps.
fn person_result(person: &Person, food: &ShareMap, tip: &ShareMap, tax: &ShareMap) -> PersonResult {
    let lookup = |map: &ShareMap| map.get(&person.id).copied().unwrap_or_default();

    let food_cents = lookup(food);
    let tip_cents = lookup(tip);
    let tax_cents = lookup(tax);
    let exact_total_cents = food_cents + tip_cents + tax_cents;
    let rounded_total_cents = round_up_to_cent(exact_total_cents);

    PersonResult {
        person_id: person.id.clone(),
        food_cents,
        tip_cents,
        tax_cents,
        exact_total_cents,
        rounded_total_cents,
        surplus_cents: rounded_total_cents - exact_total_cents,
    }
}

/// The payable amount for an exact total: the smallest whole cent that is
/// not below it.
///
/// `Money` carries no sub-cent part, so today this is the identity. It is
/// the single place a fractional-cent total would be rounded, and it must
/// round up so that surplus stays non-negative.
#[inline]
fn round_up_to_cent(exact: Money) -> Money {
    exact
}

// =============================================================================
// Unit Tests
// =============================================================================
