//! # Inline Kinds
//!
//! Emphasis span types that own both of their spellings: the Markdown
//! marker and the editor's HTML tag pair.
//!
//! ## Types
//!
//! - **`Highlight`**: `==` / `<mark class="cdx-marker">`
//! - **`Bold`**: `**` / `<b>`
//! - **`Italic`**: `*` / `<i>`
//!
//! The formatter reads these constants; it never hardcodes a marker.

pub mod bold;
pub mod highlight;
pub mod italic;

pub use bold::Bold;
pub use highlight::Highlight;
pub use italic::Italic;
