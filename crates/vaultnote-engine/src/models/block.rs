use serde::{Deserialize, Serialize};

/// Whether a list renders with numbers or bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

/// A single entry of a checklist block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

/// One typed unit of content in a block document.
///
/// Blocks never nest: a document is a flat sequence of these in reading order.
/// Text fields of `Header`, `Paragraph`, `List`, `Checklist` and `Marker` hold
/// the editor's inline HTML (see [`crate::parsing::inline`]); `Code` and `Table`
/// hold raw text.
///
/// Serializes in the block editor's `{ "type": ..., "data": { ... } }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    Header {
        text: String,
        /// Always within `1..=6` when produced by the parser.
        level: u8,
    },
    Paragraph {
        text: String,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    Table {
        #[serde(rename = "withHeadings", default)]
        with_headings: bool,
        /// Rectangular when produced by the parser.
        content: Vec<Vec<String>>,
    },
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
    Delimiter {},
    Image {
        /// Opaque to the engine: a resource name, a path, or a transient `blob:` url.
        url: String,
        #[serde(default)]
        caption: String,
        #[serde(
            rename = "isTemporary",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        is_temporary: Option<bool>,
    },
    /// A standalone highlighted line. Only ever produced by the editor.
    Marker {
        text: String,
    },
}

impl Block {
    /// The editor's type tag for this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Checklist { .. } => "checklist",
            Block::Table { .. } => "table",
            Block::Code { .. } => "code",
            Block::Delimiter {} => "delimiter",
            Block::Image { .. } => "image",
            Block::Marker { .. } => "marker",
        }
    }

    /// True for an image whose url is a transient blob that has not been saved yet.
    pub fn is_temporary_image(&self) -> bool {
        matches!(
            self,
            Block::Image {
                url,
                is_temporary: Some(true),
                ..
            } if url.starts_with("blob:")
        )
    }
}
