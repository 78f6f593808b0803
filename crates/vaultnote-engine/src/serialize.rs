//! # Serialization
//!
//! Renders a block document back to Markdown, one rule per [`Block`] variant.
//!
//! Every block is followed by one blank line. List and checklist items are one
//! line each, with the blank line after the whole run. Syntax comes from the
//! same [`kinds`](crate::parsing::blocks::kinds) types the parser matches
//! against, and inline HTML is encoded back to Markdown markers.

use crate::{
    models::{Block, BlockDocument},
    parsing::{
        blocks::kinds::{CodeFence, Heading, ImageEmbed, ListItem, Table, ThematicBreak},
        inline::encode_inline,
    },
};

/// Knobs for [`Serializer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Name written for an unsaved `blob:` image that has no caption.
    pub image_placeholder: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            image_placeholder: "image".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializeOptions,
}

impl Serializer {
    pub fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    /// Renders the document's blocks; `time` and `version` are ignored.
    pub fn serialize(&self, doc: &BlockDocument) -> String {
        self.serialize_blocks(&doc.blocks)
    }

    pub fn serialize_blocks(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            self.write_block(&mut out, block);
        }
        out
    }

    fn write_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Header { text, level } => {
                let level = Heading::clamp(usize::from(*level));
                push_block(out, &Heading::render(level, &encode_inline(text)));
            }
            Block::Paragraph { text } => push_block(out, &encode_inline(text)),
            Block::List { style, items } => {
                push_run(
                    out,
                    items
                        .iter()
                        .map(|item| ListItem::render(*style, &encode_inline(item))),
                );
            }
            Block::Checklist { items } => {
                push_run(
                    out,
                    items.iter().map(|item| {
                        ListItem::render_checklist(item.checked, &encode_inline(&item.text))
                    }),
                );
            }
            Block::Table { content, .. } => {
                let Some((head, body)) = content.split_first() else {
                    return;
                };
                let rows = std::iter::once(Table::render_row(head.as_slice()))
                    .chain(std::iter::once(Table::render_separator(head.len())))
                    .chain(body.iter().map(|row| Table::render_row(row.as_slice())));
                push_run(out, rows);
            }
            Block::Code { language, code } => {
                push_block(out, &CodeFence::render(language.as_deref(), code));
            }
            Block::Delimiter {} => push_block(out, ThematicBreak::CANONICAL),
            Block::Image { url, caption, .. } => {
                let name = if block.is_temporary_image() {
                    if caption.is_empty() {
                        self.options.image_placeholder.as_str()
                    } else {
                        caption.as_str()
                    }
                } else {
                    url.as_str()
                };
                push_block(out, &ImageEmbed::render(name));
            }
            Block::Marker { text } => {
                push_block(out, &format!("=={}==", encode_inline(text)));
            }
        }
    }
}

/// Renders with default options.
pub fn serialize_document(doc: &BlockDocument) -> String {
    Serializer::default().serialize(doc)
}

/// Renders a bare block sequence with default options.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    Serializer::default().serialize_blocks(blocks)
}

fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}

/// Writes one line per item and a blank line after the run. Empty runs write nothing.
fn push_run(out: &mut String, lines: impl Iterator<Item = String>) {
    let start = out.len();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    if out.len() > start {
        out.push('\n');
    }
}
