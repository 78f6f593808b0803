//! # Block Kinds
//!
//! One type per block grammar. Each owns its syntax: the patterns the
//! classifier matches and the canonical form the serializer writes, so the
//! two directions share a single vocabulary.

pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list_item;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use image::ImageEmbed;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
