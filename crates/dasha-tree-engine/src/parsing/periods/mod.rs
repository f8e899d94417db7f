//! # Period Parsing
//!
//! Two-phase parsing of dasha period tables around a per-level open-node stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (opened period, continuation, noise, header, summary entry). The
//!    classifier is stateless; it only reads the `ClassifyContext` snapshot
//!    handed to it.
//!
//! 2. **Hierarchy Construction** (`builder`): a `HierarchyBuilder` folds the
//!    classified lines into a `DashaTree`, moving nodes into their parents as
//!    they close.
//!
//! ## Modules
//!
//! - **`types`**: `LineClass` and `PeriodLine`
//! - **`kinds`**: owned syntax knowledge (level tags, date notations, ruler
//!   names, headers, markers, noise)
//! - **`context`**: `ClassifyContext` and the indentation fallback
//! - **`classify`**: `DashaLineClassifier`
//! - **`stack`**: `OpenStack`, four owned slots indexed by level
//! - **`builder`**: `HierarchyBuilder`
//!
//! ## Key Invariants
//!
//! - Depth is bounded by the four levels; there is no recursion
//! - A child's level is exactly one tier below its parent's
//! - No period line is dropped: unreadable dates, missing rulers and missing
//!   parents all still produce a node plus a warning

pub mod builder;
pub mod classify;
pub mod context;
pub mod kinds;
pub mod stack;
pub mod types;

pub use builder::{BuildOptions, ContinuationPolicy, HierarchyBuilder};
pub use classify::DashaLineClassifier;
pub use context::ClassifyContext;
pub use types::{LineClass, PeriodLine};
