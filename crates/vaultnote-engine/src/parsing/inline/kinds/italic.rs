/// Italic span: `*text*` in Markdown, `<i>` in the editor.
pub struct Italic;

impl Italic {
    pub const MARKER: &'static str = "*";
    pub const OPEN_TAG: &'static str = "<i>";
    pub const CLOSE_TAG: &'static str = "</i>";
}
