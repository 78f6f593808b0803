/// Fenced code block syntax.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `line` (trimmed) opens a fence, returns its language tag.
    ///
    /// The outer `Option` says whether this is a fence at all; the inner one
    /// is `None` when no language follows the backticks.
    pub fn open(line: &str) -> Option<Option<&str>> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        let language = rest.trim();
        Some((!language.is_empty()).then_some(language))
    }

    /// Whether a raw line inside an open fence closes it.
    pub fn closes(raw: &str) -> bool {
        raw.trim().starts_with(Self::BACKTICKS)
    }

    /// Renders a fence around `code`.
    pub fn render(language: Option<&str>, code: &str) -> String {
        format!(
            "{fence}{lang}\n{code}\n{fence}",
            fence = Self::BACKTICKS,
            lang = language.unwrap_or_default()
        )
    }
}
