/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// grammar matches. Consecutive source lines are joined with `JOIN`.
pub struct Paragraph;

impl Paragraph {
    pub const JOIN: &'static str = " ";
}
