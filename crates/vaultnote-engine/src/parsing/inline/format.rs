use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::kinds::{Bold, Highlight, Italic};

static HIGHLIGHT_SPAN: LazyLock<Regex> = LazyLock::new(|| span_regex(Highlight::MARKER));
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| span_regex(Bold::MARKER));
static ITALIC_SPAN: LazyLock<Regex> = LazyLock::new(|| span_regex(Italic::MARKER));

static MARK_TAG: LazyLock<Regex> = LazyLock::new(|| tag_regex("mark"));
static BOLD_TAG: LazyLock<Regex> = LazyLock::new(|| tag_regex("b|strong"));
static ITALIC_TAG: LazyLock<Regex> = LazyLock::new(|| tag_regex("i|em"));
static BREAK_TAG: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)<br\s*/?>"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| regex(r"</?[A-Za-z][^>]*>"));

/// Non-greedy `MARKER(.*?)MARKER`.
fn span_regex(marker: &str) -> Regex {
    let m = regex::escape(marker);
    regex(&format!("{m}(.*?){m}"))
}

/// Opening or closing tag with one of the given names, attributes allowed.
fn tag_regex(names: &str) -> Regex {
    regex(&format!(r"(?i)</?(?:{names})(?:\s[^>]*)?>"))
}

fn regex(pattern: &str) -> Regex {
    // Patterns are built from constants; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid inline pattern {pattern:?}: {e}"))
}

/// Converts Markdown emphasis markers in `raw` into the editor's inline HTML.
pub fn decode_inline(raw: &str) -> String {
    let escaped = html_escape::encode_text(raw);
    let highlighted = HIGHLIGHT_SPAN.replace_all(
        &escaped,
        format!("{}${{1}}{}", Highlight::OPEN_TAG, Highlight::CLOSE_TAG).as_str(),
    );
    let bolded = BOLD_SPAN.replace_all(
        &highlighted,
        format!("{}${{1}}{}", Bold::OPEN_TAG, Bold::CLOSE_TAG).as_str(),
    );
    ITALIC_SPAN
        .replace_all(
            &bolded,
            format!("{}${{1}}{}", Italic::OPEN_TAG, Italic::CLOSE_TAG).as_str(),
        )
        .into_owned()
}

/// Converts the editor's inline HTML in `stored` back into Markdown.
pub fn encode_inline(stored: &str) -> String {
    let s: Cow<'_, str> = MARK_TAG.replace_all(stored, Highlight::MARKER);
    let s = BOLD_TAG.replace_all(&s, Bold::MARKER).into_owned();
    let s = ITALIC_TAG.replace_all(&s, Italic::MARKER).into_owned();
    let s = BREAK_TAG.replace_all(&s, " ").into_owned();
    let s = ANY_TAG.replace_all(&s, "").into_owned();
    html_escape::decode_html_entities(&s).into_owned()
}
