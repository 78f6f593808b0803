use std::sync::LazyLock;

use regex::Regex;

use crate::models::ListStyle;

static CHECKLIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^[-*+]\s*\[([ x])\]\s*(.*)$"));
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[-*+]\s(.*)$"));
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]+\.\s(.*)$"));

fn pattern(p: &str) -> Regex {
    Regex::new(p).unwrap_or_else(|e| panic!("invalid list pattern {p:?}: {e}"))
}

/// List and checklist item syntax.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";
    pub const CHECKED: &'static str = "- [x] ";
    pub const UNCHECKED: &'static str = "- [ ] ";

    /// `- [ ] text` / `* [x] text`; returns `(checked, text)`.
    ///
    /// The text may be empty; such items are dropped by the builder.
    pub fn checklist(line: &str) -> Option<(bool, &str)> {
        let caps = CHECKLIST_ITEM.captures(line)?;
        let checked = caps.get(1)?.as_str().eq_ignore_ascii_case("x");
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((checked, text))
    }

    /// `- text`, `* text` or `+ text`.
    pub fn bullet(line: &str) -> Option<&str> {
        BULLET_ITEM
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// `1. text`.
    pub fn ordered(line: &str) -> Option<&str> {
        ORDERED_ITEM
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    pub fn render(style: ListStyle, text: &str) -> String {
        match style {
            ListStyle::Ordered => format!("1. {text}"),
            ListStyle::Unordered => format!("{}{text}", Self::BULLET),
        }
    }

    pub fn render_checklist(checked: bool, text: &str) -> String {
        let prefix = if checked {
            Self::CHECKED
        } else {
            Self::UNCHECKED
        };
        format!("{prefix}{text}")
    }
}
