pub mod error;
pub mod models;
pub mod parsing;
pub mod serialize;
pub mod wire;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use models::*;
pub use parsing::{parse_blocks, parse_markdown, parse_markdown_at};
pub use serialize::{SerializeOptions, Serializer, serialize_blocks, serialize_document};
pub use wire::render_json;
