use std::sync::LazyLock;

use regex::Regex;

static STANDARD_IMAGE: LazyLock<Regex> = LazyLock::new(|| pattern(r"!\[(.*?)\]\((.*?)\)"));
static WIKI_IMAGE: LazyLock<Regex> = LazyLock::new(|| pattern(r"!\[\[(.*?)\]\]"));

fn pattern(p: &str) -> Regex {
    Regex::new(p).unwrap_or_else(|e| panic!("invalid image pattern {p:?}: {e}"))
}

/// Image embed syntax: `![caption](url)` or wiki-style `![[name]]`.
pub struct ImageEmbed;

impl ImageEmbed {
    /// Finds an image anywhere on the line; returns `(url, caption)`.
    ///
    /// The wiki form uses its name as both url and caption.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        if let Some(caps) = STANDARD_IMAGE.captures(line) {
            let caption = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            return Some((url, caption));
        }
        let name = WIKI_IMAGE.captures(line)?.get(1)?.as_str();
        Some((name, name))
    }

    pub fn render(name: &str) -> String {
        format!("![[{name}]]")
    }
}
