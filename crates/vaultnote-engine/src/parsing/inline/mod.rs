//! # Inline Formatting
//!
//! Converts emphasis markers between Markdown and the editor's inline HTML.
//!
//! ## Direction
//!
//! - **Decode** (`decode_inline`): Markdown text to stored HTML. The raw text is
//!   HTML-escaped first, then spans are replaced longest marker first:
//!   highlight, bold, italic.
//! - **Encode** (`encode_inline`): stored HTML back to Markdown. Known tags become
//!   their markers, unknown tags are stripped, entities are decoded.
//!
//! `encode_inline(&decode_inline(s)) == s` for every `s`. The reverse does not
//! hold: HTML from the editor may nest or overlap spans in ways Markdown markers
//! cannot express, and those come back in whatever order the tags appeared.
//!
//! ## Scope
//!
//! Applied to header, paragraph, list item and checklist item text only. Code
//! and table content are never touched.

pub mod format;
pub mod kinds;

pub use format::{decode_inline, encode_inline};
