//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a parsed document as a stable text listing
//!   (source line, level, ruler, dates, notes, warnings) for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (level nesting,
//!   spans in bounds, document order, date order for well-formed input)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use invariants::check_date_order;
pub use normalize::normalize;
