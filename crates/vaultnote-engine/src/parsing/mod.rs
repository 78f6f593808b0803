pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::models::{Block, BlockDocument, document::now_millis};

use blocks::BlockBuilder;

/// Parses Markdown into a block document stamped with the current time.
///
/// Never fails: malformed input degrades to whatever blocks can be recovered.
pub fn parse_markdown(text: &str) -> BlockDocument {
    parse_markdown_at(text, now_millis())
}

/// Parses Markdown into a block document with an explicit creation time.
pub fn parse_markdown_at(text: &str, time: i64) -> BlockDocument {
    BlockDocument::with_time(parse_blocks(text), time)
}

/// Parses Markdown into its block sequence only.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut builder = BlockBuilder::new();
    for line in text.lines() {
        builder.push(line);
    }
    builder.finish()
}
