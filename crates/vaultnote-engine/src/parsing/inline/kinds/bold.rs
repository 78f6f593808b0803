/// Bold span: `**text**` in Markdown, `<b>` in the editor.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";
    pub const OPEN_TAG: &'static str = "<b>";
    pub const CLOSE_TAG: &'static str = "</b>";
}
