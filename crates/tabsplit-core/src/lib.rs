//! # tabsplit-core: Deterministic Bill Splitting
//!
//! This crate is the **heart** of tabsplit. It turns a restaurant bill
//! (people, items, who shared what, a tip and a tax) into what each person
//! owes, in integer cents, with every cent accounted for.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          tabsplit Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Shells (web front end, tabsplit CLI)                │   │
//! │  │    People ──► Items ──► Assign ──► Tip/Tax ──► Summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillConfig (JSON)                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tabsplit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ apportion │  │distribute │  │  engine   │  │  summary  │  │   │
//! │  │   │  equal    │  │  items    │  │  compute  │  │   text    │  │   │
//! │  │   │ weighted  │  │  charges  │  │           │  │   views   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • SAME INPUT ⇒ SAME OUTPUT                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Bill inputs and split results
//! - [`apportion`] - Equal and weighted largest-remainder splits
//! - [`distribute`] - Item and charge distribution over people
//! - [`engine`] - The [`compute`] orchestrator
//! - [`summary`] - Plain-text views of a split
//! - [`validation`] - Boundary checks on untrusted input
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `compute` never mutates its input and is repeatable
//! 2. **Integer Money**: All monetary values are in cents (i64)
//! 3. **Conservation**: Shares always sum exactly to what was split
//! 4. **Fail Closed**: One unassigned item blocks the whole split
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::{compute, BillConfig, ChargePolicy, Item, Money, Person};
//!
//! let alice = Person::with_id("alice", "Alice");
//! let bob = Person::with_id("bob", "Bob");
//! let pizza = Item::with_id("pizza", "Pizza", Money::from_cents(1000), 1);
//!
//! let mut config = BillConfig {
//!     people: vec![alice.clone(), bob.clone()],
//!     items: vec![pizza.clone()],
//!     tip: ChargePolicy::equal(Money::from_cents(301)),
//!     ..BillConfig::default()
//! };
//! config.assign(&pizza.id, [alice.id.clone(), bob.id.clone()]);
//!
//! let split = compute(&config).unwrap();
//! // Pizza 500 each; the odd tip cent goes to the first eligible person.
//! assert_eq!(split.results[0].rounded_total_cents.cents(), 651);
//! assert_eq!(split.results[1].rounded_total_cents.cents(), 650);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod apportion;
pub mod distribute;
pub mod engine;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tabsplit_core::Money` instead of
// `use tabsplit_core::money::Money`

pub use apportion::{apportion, apportion_weighted};
pub use engine::compute;
pub use error::{SplitError, SplitResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity assumed when an item omits it.
pub const DEFAULT_QUANTITY: i64 = 1;
