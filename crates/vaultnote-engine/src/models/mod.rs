pub mod block;
pub mod document;

pub use block::{Block, ChecklistItem, ListStyle};
pub use document::{BlockDocument, FORMAT_VERSION};
