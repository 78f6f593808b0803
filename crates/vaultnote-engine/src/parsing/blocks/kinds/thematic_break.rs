/// Horizontal rule syntax, stored as a delimiter block.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Every spelling the parser accepts.
    pub const SPELLINGS: [&'static str; 3] = ["---", "***", "___"];
    /// The spelling the serializer writes.
    pub const CANONICAL: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        Self::SPELLINGS.contains(&line)
    }
}
