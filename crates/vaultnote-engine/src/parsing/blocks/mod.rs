//! # Block Parsing
//!
//! Line-oriented block parsing in two steps per line.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is matched against
//!    the ordered rule table `RULES`; the first grammar that accepts it wins.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine keeps at
//!    most one open multi-line block (list run, checklist run, code fence, table,
//!    paragraph) and emits `Block`s as they close.
//!
//! ## Modules
//!
//! - **`kinds`**: per-grammar syntax owners shared with the serializer
//! - **`classify`**: `Grammar`, `LineClass`, `RULES`, `LineClassifier`
//! - **`builder`**: `BlockBuilder` with explicit `ListAccumulator` / `ChecklistAccumulator`
//!
//! ## Key Invariants
//!
//! - Output is flat: blocks never nest
//! - Fenced code is a raw zone: no classification or inline decoding inside
//! - Table rows are rectangular; header levels are within `1..=6`
//! - No two adjacent list blocks share a style; no two checklists are adjacent

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockBuilder, ChecklistAccumulator, ListAccumulator};
pub use classify::{Grammar, LineClass, LineClassifier, RULES, Rule};
