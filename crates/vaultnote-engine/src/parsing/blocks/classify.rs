use crate::models::ListStyle;

use super::kinds::{CodeFence, Heading, ImageEmbed, ListItem, Table, ThematicBreak};

/// The block grammars a line can begin, in no particular order.
///
/// Precedence lives in [`RULES`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Blank,
    Delimiter,
    CodeFence,
    Table,
    Image,
    Header,
    ChecklistItem,
    UnorderedItem,
    OrderedItem,
    Paragraph,
}

/// Classification of a single trimmed line, with the captures its grammar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Delimiter,
    CodeFence {
        language: Option<&'a str>,
    },
    TableRow(&'a str),
    Image {
        url: &'a str,
        caption: &'a str,
    },
    Header {
        level: u8,
        text: &'a str,
    },
    ChecklistItem {
        checked: bool,
        text: &'a str,
    },
    ListItem {
        style: ListStyle,
        text: &'a str,
    },
    Text(&'a str),
}

impl LineClass<'_> {
    pub fn grammar(&self) -> Grammar {
        match self {
            LineClass::Blank => Grammar::Blank,
            LineClass::Delimiter => Grammar::Delimiter,
            LineClass::CodeFence { .. } => Grammar::CodeFence,
            LineClass::TableRow(_) => Grammar::Table,
            LineClass::Image { .. } => Grammar::Image,
            LineClass::Header { .. } => Grammar::Header,
            LineClass::ChecklistItem { .. } => Grammar::ChecklistItem,
            LineClass::ListItem {
                style: ListStyle::Unordered,
                ..
            } => Grammar::UnorderedItem,
            LineClass::ListItem {
                style: ListStyle::Ordered,
                ..
            } => Grammar::OrderedItem,
            LineClass::Text(_) => Grammar::Paragraph,
        }
    }
}

/// One entry of the precedence table: a grammar and its line matcher.
pub struct Rule {
    pub grammar: Grammar,
    matcher: for<'a> fn(&'a str) -> Option<LineClass<'a>>,
}

impl Rule {
    pub fn apply<'a>(&self, line: &'a str) -> Option<LineClass<'a>> {
        (self.matcher)(line)
    }
}

/// Grammars in the order they are tried. The first match wins; a line that
/// matches none is paragraph text.
///
/// Syntaxes overlap, so order matters: a checklist item is also a valid
/// bullet item, `---` is also a table separator shape, and `# ![a](b)` is
/// both a header and an image.
pub const RULES: &[Rule] = &[
    Rule {
        grammar: Grammar::Blank,
        matcher: blank,
    },
    Rule {
        grammar: Grammar::Delimiter,
        matcher: delimiter,
    },
    Rule {
        grammar: Grammar::CodeFence,
        matcher: code_fence,
    },
    Rule {
        grammar: Grammar::Table,
        matcher: table_row,
    },
    Rule {
        grammar: Grammar::Image,
        matcher: image,
    },
    Rule {
        grammar: Grammar::Header,
        matcher: header,
    },
    Rule {
        grammar: Grammar::ChecklistItem,
        matcher: checklist_item,
    },
    Rule {
        grammar: Grammar::UnorderedItem,
        matcher: unordered_item,
    },
    Rule {
        grammar: Grammar::OrderedItem,
        matcher: ordered_item,
    },
];

fn blank(line: &str) -> Option<LineClass<'_>> {
    line.is_empty().then_some(LineClass::Blank)
}

fn delimiter(line: &str) -> Option<LineClass<'_>> {
    ThematicBreak::matches(line).then_some(LineClass::Delimiter)
}

fn code_fence(line: &str) -> Option<LineClass<'_>> {
    CodeFence::open(line).map(|language| LineClass::CodeFence { language })
}

fn table_row(line: &str) -> Option<LineClass<'_>> {
    Table::is_row(line).then_some(LineClass::TableRow(line))
}

fn image(line: &str) -> Option<LineClass<'_>> {
    ImageEmbed::parse(line).map(|(url, caption)| LineClass::Image { url, caption })
}

fn header(line: &str) -> Option<LineClass<'_>> {
    Heading::parse(line).map(|(level, text)| LineClass::Header { level, text })
}

fn checklist_item(line: &str) -> Option<LineClass<'_>> {
    ListItem::checklist(line).map(|(checked, text)| LineClass::ChecklistItem { checked, text })
}

fn unordered_item(line: &str) -> Option<LineClass<'_>> {
    ListItem::bullet(line).map(|text| LineClass::ListItem {
        style: ListStyle::Unordered,
        text,
    })
}

fn ordered_item(line: &str) -> Option<LineClass<'_>> {
    ListItem::ordered(line).map(|text| LineClass::ListItem {
        style: ListStyle::Ordered,
        text,
    })
}

/// Classifies lines by walking [`RULES`] in order.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line after trimming surrounding whitespace.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        RULES
            .iter()
            .find_map(|rule| rule.apply(trimmed))
            .unwrap_or(LineClass::Text(trimmed))
    }

    /// Every grammar whose matcher accepts the line, in precedence order.
    ///
    /// Useful for seeing which rules a line competes between.
    pub fn candidates(&self, line: &str) -> Vec<Grammar> {
        let trimmed = line.trim();
        let mut out: Vec<Grammar> = RULES
            .iter()
            .filter(|rule| rule.apply(trimmed).is_some())
            .map(|rule| rule.grammar)
            .collect();
        out.push(Grammar::Paragraph);
        out
    }
}
