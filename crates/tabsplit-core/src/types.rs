//! # Domain Types
//!
//! The engine's input (`BillConfig`) and output (`EngineResult`) types.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  BillConfig (input, read-only)                                          │
//! │  ├── people:      Vec<Person>        { id: PersonId, name }            │
//! │  ├── items:       Vec<Item>          { id: ItemId, label, price, qty } │
//! │  ├── assignments: ItemId → [PersonId]                                  │
//! │  ├── tip:         ChargePolicy       { amount, method, include flag }  │
//! │  └── tax:         ChargePolicy                                          │
//! │                                                                         │
//! │  EngineResult (output, closed two-variant outcome)                      │
//! │  ├── Success(BillSplit)     { results: [PersonResult], surplus }       │
//! │  └── Failure(UnassignedItems) { unassigned_item_ids }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Person and item ids are opaque strings owned by the caller. They are
//! distinct newtypes so a `PersonId` can never be passed where an `ItemId`
//! is expected. `new()` mints a UUID v4 when the caller has none.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{SplitError, SplitResult};
use crate::money::Money;
use crate::validation::{self, ValidationResult};
use crate::DEFAULT_QUANTITY;

// =============================================================================
// Identifiers
// =============================================================================

/// Generates an opaque string identifier newtype.
macro_rules! string_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        pub struct $name(String);

        impl $name {
            /// Mints a fresh random id (UUID v4).
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the id as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(PersonId, "Unique identifier for a person sharing the bill.");
string_id!(ItemId, "Unique identifier for a line item on the bill.");

// =============================================================================
// Person
// =============================================================================

/// A person participating in the bill split.
///
/// Owned by the caller; the engine only reads the list. `mobile` and
/// `upi_vpa` are payment details the front end keeps on a person; the
/// engine carries them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub upi_vpa: Option<String>,
}

impl Person {
    /// Creates a person with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Person::with_id(PersonId::new(), name)
    }

    /// Creates a person with a caller-supplied id.
    pub fn with_id(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Person {
            id: id.into(),
            name: name.into(),
            mobile: None,
            upi_vpa: None,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single line item on the bill.
///
/// Total cost = `price_cents` × `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    /// Unit price in integer cents.
    pub price_cents: Money,
    /// Number of this item ordered. Defaults to 1 when absent.
    #[serde(default = "default_quantity")]
    #[ts(type = "number")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    DEFAULT_QUANTITY
}

impl Item {
    /// Creates an item with a fresh id.
    pub fn new(label: impl Into<String>, price_cents: Money, quantity: i64) -> Self {
        Item {
            id: ItemId::new(),
            label: label.into(),
            price_cents,
            quantity,
        }
    }

    /// Creates an item with a caller-supplied id.
    pub fn with_id(
        id: impl Into<ItemId>,
        label: impl Into<String>,
        price_cents: Money,
        quantity: i64,
    ) -> Self {
        Item {
            id: id.into(),
            label: label.into(),
            price_cents,
            quantity,
        }
    }

    /// Line total (unit price × quantity), clamped rather than overflowing.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price_cents.saturating_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Assignments
// =============================================================================

/// Which people share each item, in sharing order.
///
/// A missing key or an empty list means the item is unassigned, which
/// blocks the whole computation. Person ids listed here need not exist in
/// the people list; stale ids simply contribute nothing.
pub type Assignments = BTreeMap<ItemId, Vec<PersonId>>;

// =============================================================================
// Charge Policy
// =============================================================================

/// How a tip or tax charge is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    /// Same share for every eligible person (extra cents to the earliest).
    #[default]
    Equal,
    /// Share weighted by each person's food subtotal.
    Proportional,
}

/// Configuration for one aggregate charge (tip or tax).
///
/// ## The Inclusion Flag
/// `include_zero_food_people` only affects [`SplitMethod::Equal`]. Under
/// [`SplitMethod::Proportional`] a person's weight is their food subtotal,
/// so someone who ate nothing always pays exactly 0 of the charge, whatever
/// the flag says. This asymmetry is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChargePolicy {
    /// Total charge in integer cents (may be 0).
    pub amount_cents: Money,
    pub method: SplitMethod,
    /// Whether people with zero food still share an `Equal` split.
    pub include_zero_food_people: bool,
}

impl ChargePolicy {
    /// No charge at all.
    pub const fn none() -> Self {
        ChargePolicy {
            amount_cents: Money::zero(),
            method: SplitMethod::Equal,
            include_zero_food_people: false,
        }
    }

    /// An equal split among people who ordered something.
    pub const fn equal(amount_cents: Money) -> Self {
        ChargePolicy {
            amount_cents,
            method: SplitMethod::Equal,
            include_zero_food_people: false,
        }
    }

    /// A split weighted by food subtotal.
    pub const fn proportional(amount_cents: Money) -> Self {
        ChargePolicy {
            amount_cents,
            method: SplitMethod::Proportional,
            include_zero_food_people: false,
        }
    }

    /// Sets the zero-food inclusion flag.
    pub const fn including_zero_food(mut self, include: bool) -> Self {
        self.include_zero_food_people = include;
        self
    }
}

// =============================================================================
// Bill Configuration
// =============================================================================

/// The complete description of a bill to be split.
///
/// This is the engine's sole input and is never mutated by it. All five
/// fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillConfig {
    pub people: Vec<Person>,
    pub items: Vec<Item>,
    pub assignments: Assignments,
    pub tip: ChargePolicy,
    pub tax: ChargePolicy,
}

impl BillConfig {
    /// Decodes a bill from JSON and validates it at the input boundary.
    ///
    /// ## Checks
    /// - ids are non-empty and unique (people and items separately)
    /// - prices and charge amounts are non-negative
    /// - quantities are at least 1
    ///
    /// Unassigned items and dangling person ids are deliberately *not*
    /// rejected here; the engine reports the former and ignores the latter.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::BillConfig;
    ///
    /// let config = BillConfig::from_json(r#"{
    ///     "people": [{ "id": "a", "name": "Alice" }],
    ///     "items": [{ "id": "x", "label": "Pizza", "priceCents": 1200 }],
    ///     "assignments": { "x": ["a"] },
    ///     "tip": { "amountCents": 200, "method": "equal", "includeZeroFoodPeople": false },
    ///     "tax": { "amountCents": 0, "method": "equal", "includeZeroFoodPeople": false }
    /// }"#).unwrap();
    /// assert_eq!(config.items[0].quantity, 1);
    /// ```
    pub fn from_json(json: &str) -> ValidationResult<BillConfig> {
        let config: BillConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Assigns an item to the given people, replacing any prior assignment.
    pub fn assign(&mut self, item_id: &ItemId, people: impl IntoIterator<Item = PersonId>) {
        self.assignments
            .insert(item_id.clone(), people.into_iter().collect());
    }

    /// Validates the bill without decoding it.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_bill_config(self)
    }
}

// =============================================================================
// Results
// =============================================================================

/// Per-person calculation result.
///
/// `food_cents`, `tip_cents` and `tax_cents` are whole cents produced by
/// largest-remainder apportionment, so `exact_total_cents` is whole too and
/// `surplus_cents` is 0 today. The rounded total is still derived by
/// rounding up, so a payer never pays less than their exact share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub person_id: PersonId,
    pub food_cents: Money,
    pub tip_cents: Money,
    pub tax_cents: Money,
    /// food + tip + tax.
    pub exact_total_cents: Money,
    /// What this person actually pays; never below the exact total.
    pub rounded_total_cents: Money,
    /// rounded - exact, always >= 0.
    pub surplus_cents: Money,
}

/// A successful split: one result per person, in people-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillSplit {
    pub results: Vec<PersonResult>,
    /// Sum of every person's surplus ("extra collected due to rounding").
    pub total_surplus_cents: Money,
}

impl BillSplit {
    /// Looks up the result row for one person.
    pub fn result_for(&self, person_id: &PersonId) -> Option<&PersonResult> {
        self.results.iter().find(|r| &r.person_id == person_id)
    }

    /// Sum of every person's rounded total.
    pub fn grand_total(&self) -> Money {
        self.results.iter().map(|r| r.rounded_total_cents).sum()
    }
}

/// Why a split could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    UnassignedItems,
}

/// Serializable body of a failed split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedItems {
    pub reason: FailureReason,
    pub unassigned_item_ids: Vec<ItemId>,
}

/// The engine outcome as plain data, for shells that serialize it.
///
/// Rust callers normally match on [`SplitResult<BillSplit>`] returned by
/// [`crate::compute`]; this type is the same closed two-variant outcome
/// with a string tag (`"outcome": "success" | "failure"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EngineResult {
    Success(BillSplit),
    Failure(UnassignedItems),
}

impl EngineResult {
    /// True for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, EngineResult::Success(_))
    }
}

impl From<SplitResult<BillSplit>> for EngineResult {
    fn from(result: SplitResult<BillSplit>) -> Self {
        match result {
            Ok(split) => EngineResult::Success(split),
            Err(SplitError::UnassignedItems { item_ids }) => {
                EngineResult::Failure(UnassignedItems {
                    reason: FailureReason::UnassignedItems,
                    unassigned_item_ids: item_ids,
                })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
