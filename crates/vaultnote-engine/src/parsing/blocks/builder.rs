use crate::models::{Block, ChecklistItem, ListStyle};
use crate::parsing::inline::decode_inline;

use super::{
    classify::{LineClass, LineClassifier},
    kinds::{CodeFence, Paragraph, Table},
};

/// A contiguous run of same-style list items waiting to become one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAccumulator {
    pub style: ListStyle,
    pub items: Vec<String>,
}

impl ListAccumulator {
    pub fn new(style: ListStyle) -> Self {
        Self {
            style,
            items: vec![],
        }
    }

    pub fn push(&mut self, raw_text: &str) {
        self.items.push(decode_inline(raw_text));
    }

    pub fn into_block(self) -> Option<Block> {
        (!self.items.is_empty()).then_some(Block::List {
            style: self.style,
            items: self.items,
        })
    }
}

/// A checklist run. Blank lines inside the run do not end it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistAccumulator {
    pub items: Vec<ChecklistItem>,
}

impl ChecklistAccumulator {
    pub fn push(&mut self, checked: bool, raw_text: &str) {
        if raw_text.is_empty() {
            log::debug!("dropping checklist item without text");
            return;
        }
        self.items
            .push(ChecklistItem::new(decode_inline(raw_text), checked));
    }

    pub fn into_block(self) -> Option<Block> {
        (!self.items.is_empty()).then_some(Block::Checklist { items: self.items })
    }
}

/// Parser state: one variant per multi-line grammar.
///
/// Single-line grammars (delimiter, image, header) are emitted on sight and
/// leave the builder `Idle`.
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    List(ListAccumulator),
    Checklist(ChecklistAccumulator),
    Code {
        language: Option<String>,
        lines: Vec<String>,
    },
    Table(Vec<Vec<String>>),
    Paragraph(Vec<String>),
}

/// Line-at-a-time state machine that assembles blocks.
///
/// Transitions:
///
/// | State       | Continues on                          | Anything else             |
/// |-------------|---------------------------------------|---------------------------|
/// | `Idle`      | -                                     | opens per classification  |
/// | `List`      | same-style item                       | flush, then reclassify    |
/// | `Checklist` | checklist item, blank                 | flush, then reclassify    |
/// | `Code`      | any line until a closing fence        | (closing fence emits)     |
/// | `Table`     | separator (skipped), table-shaped row | flush, then reclassify    |
/// | `Paragraph` | text that keeps the joined line text  | flush, then reclassify    |
pub struct BlockBuilder {
    classifier: LineClassifier,
    state: State,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            state: State::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, raw: &str) {
        let state = std::mem::take(&mut self.state);
        self.state = self.step(state, raw);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        let state = std::mem::take(&mut self.state);
        if let State::Code { .. } = state {
            log::warn!("unterminated code fence; treating the rest of the input as code");
        }
        self.flush(state);
        self.out
    }

    fn step(&mut self, state: State, raw: &str) -> State {
        match state {
            State::Code {
                language,
                mut lines,
            } => {
                if CodeFence::closes(raw) {
                    self.flush(State::Code { language, lines });
                    State::Idle
                } else {
                    lines.push(raw.to_string());
                    State::Code { language, lines }
                }
            }
            State::Table(mut rows) => {
                if !raw.trim().is_empty() && Table::is_separator(raw) {
                    return State::Table(rows);
                }
                let class = self.classifier.classify(raw);
                if let LineClass::TableRow(line) = class {
                    rows.extend(Table::cells(line));
                    return State::Table(rows);
                }
                self.flush(State::Table(rows));
                self.open(class)
            }
            State::Checklist(mut acc) => match self.classifier.classify(raw) {
                LineClass::ChecklistItem { checked, text } => {
                    acc.push(checked, text);
                    State::Checklist(acc)
                }
                LineClass::Blank => State::Checklist(acc),
                class => {
                    self.flush(State::Checklist(acc));
                    self.open(class)
                }
            },
            State::List(mut acc) => match self.classifier.classify(raw) {
                LineClass::ListItem { style, text } if style == acc.style => {
                    acc.push(text);
                    State::List(acc)
                }
                class => {
                    self.flush(State::List(acc));
                    self.open(class)
                }
            },
            State::Paragraph(mut lines) => match self.classifier.classify(raw) {
                LineClass::Text(text) if self.stays_paragraph(&lines, text) => {
                    lines.push(text.to_string());
                    State::Paragraph(lines)
                }
                LineClass::Text(text) => {
                    // Joining would form a table row or an image.
                    self.flush(State::Paragraph(lines));
                    State::Paragraph(vec![text.to_string()])
                }
                class => {
                    self.flush(State::Paragraph(lines));
                    self.open(class)
                }
            },
            State::Idle => {
                let class = self.classifier.classify(raw);
                self.open(class)
            }
        }
    }

    /// Whether `lines` joined with `next` still reads as paragraph text.
    fn stays_paragraph(&self, lines: &[String], next: &str) -> bool {
        let mut joined = lines.join(Paragraph::JOIN);
        joined.push_str(Paragraph::JOIN);
        joined.push_str(next);
        matches!(self.classifier.classify(&joined), LineClass::Text(_))
    }

    /// Starts whatever grammar `class` begins, from an idle builder.
    fn open(&mut self, class: LineClass<'_>) -> State {
        match class {
            LineClass::Blank => State::Idle,
            LineClass::Delimiter => {
                self.emit(Block::Delimiter {});
                State::Idle
            }
            LineClass::CodeFence { language } => State::Code {
                language: language.map(str::to_string),
                lines: vec![],
            },
            LineClass::TableRow(line) => State::Table(Table::cells(line).into_iter().collect()),
            LineClass::Image { url, caption } => {
                self.emit(Block::Image {
                    url: url.to_string(),
                    caption: caption.to_string(),
                    is_temporary: None,
                });
                State::Idle
            }
            LineClass::Header { level, text } => {
                if text.is_empty() {
                    log::debug!("dropping header without text");
                } else {
                    self.emit(Block::Header {
                        text: decode_inline(text),
                        level,
                    });
                }
                State::Idle
            }
            LineClass::ChecklistItem { checked, text } => {
                let mut acc = ChecklistAccumulator::default();
                acc.push(checked, text);
                State::Checklist(acc)
            }
            LineClass::ListItem { style, text } => {
                let mut acc = ListAccumulator::new(style);
                acc.push(text);
                State::List(acc)
            }
            LineClass::Text(text) => State::Paragraph(vec![text.to_string()]),
        }
    }

    fn flush(&mut self, state: State) {
        let block = match state {
            State::Idle => None,
            State::List(acc) => acc.into_block(),
            State::Checklist(acc) => acc.into_block(),
            State::Code { language, lines } => Some(Block::Code {
                language,
                code: lines.join("\n"),
            }),
            State::Table(rows) => {
                if rows.is_empty() {
                    log::debug!("dropping table without data rows");
                    None
                } else {
                    Some(Block::Table {
                        with_headings: true,
                        content: Table::rectangular(rows),
                    })
                }
            }
            State::Paragraph(lines) => Some(Block::Paragraph {
                text: decode_inline(&lines.join(Paragraph::JOIN)),
            }),
        };
        if let Some(block) = block {
            self.emit(block);
        }
    }

    /// Appends a block, merging a list or checklist into an immediately
    /// preceding one of the same kind so runs split only by blank lines (or by
    /// lines that produced nothing) stay whole.
    fn emit(&mut self, block: Block) {
        let block = match self.out.last_mut() {
            Some(prev) => match merge_run(prev, block) {
                Some(block) => block,
                None => return,
            },
            None => block,
        };
        self.out.push(block);
    }
}

/// Folds `block` into `prev` when both are runs of the same kind, otherwise hands it back.
fn merge_run(prev: &mut Block, block: Block) -> Option<Block> {
    match (prev, block) {
        (
            Block::List {
                style: prev_style,
                items: prev_items,
            },
            Block::List { style, items },
        ) if *prev_style == style => {
            prev_items.extend(items);
            None
        }
        (Block::Checklist { items: prev_items }, Block::Checklist { items }) => {
            prev_items.extend(items);
            None
        }
        (_, block) => Some(block),
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
