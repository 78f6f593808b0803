/// Highlight span: `==text==` in Markdown, a marker `<mark>` in the editor.
pub struct Highlight;

impl Highlight {
    pub const MARKER: &'static str = "==";
    /// Opening tag the editor's marker tool produces.
    pub const OPEN_TAG: &'static str = r#"<mark class="cdx-marker">"#;
    pub const CLOSE_TAG: &'static str = "</mark>";
}
