//! # Error Types
//!
//! Domain-specific error types for tabsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabsplit-core errors (this file)                                      │
//! │  ├── SplitError       - The engine's one failure: unassigned items     │
//! │  └── ValidationError  - Input boundary failures (decode, parse)        │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - I/O, JSON, config, wraps ValidationError       │
//! │                                                                         │
//! │  The engine itself never sees a ValidationError: bad input is stopped  │
//! │  at the boundary, so `compute` only ever fails one way.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, ids)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Split Error
// =============================================================================

/// The engine's single domain error.
///
/// ## When This Occurs
/// One or more items have no assignment entry, or an empty one. The
/// computation is all-or-nothing: no partial split is ever produced.
///
/// ## User Workflow
/// ```text
/// compute(config)
///      │
///      ▼
/// Scan items: "Wings" has []
///      │
///      ▼
/// UnassignedItems { item_ids: ["wings-id"] }
///      │
///      ▼
/// UI shows: "1 item needs assignment"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Items with no (or an empty) list of sharers, in item-list order.
    #[error("{}", unassigned_message(.item_ids.len()))]
    UnassignedItems { item_ids: Vec<ItemId> },
}

impl SplitError {
    /// Ids of the items that blocked the computation.
    pub fn unassigned_item_ids(&self) -> &[ItemId] {
        match self {
            SplitError::UnassignedItems { item_ids } => item_ids,
        }
    }
}

/// "1 item needs assignment" / "3 items need assignment".
pub(crate) fn unassigned_message(count: usize) -> String {
    if count == 1 {
        "1 item needs assignment".to_string()
    } else {
        format!("{count} items need assignment")
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied input doesn't meet requirements.
/// Raised while decoding a bill or parsing a typed amount, before the
/// engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., negative amount typed by a user).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two people sharing one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The bill document is not valid JSON for a bill configuration.
    #[error("Malformed bill configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for engine results.
pub type SplitResult<T> = Result<T, SplitError>;

// =============================================================================
// Unit Tests
// =============================================================================
