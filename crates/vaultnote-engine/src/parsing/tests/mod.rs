//! Behavioural tests for the block assembler.
//!
//! Each test feeds Markdown through `parse_blocks` and checks the exact
//! block sequence that comes out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Block, ChecklistItem, ListStyle};
use crate::parsing::{parse_blocks, parse_markdown_at};

fn header(level: u8, text: &str) -> Block {
    Block::Header {
        text: text.into(),
        level,
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph { text: text.into() }
}

fn list(style: ListStyle, items: &[&str]) -> Block {
    Block::List {
        style,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn table(rows: &[&[&str]]) -> Block {
    Block::Table {
        with_headings: true,
        content: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

fn code(language: Option<&str>, body: &str) -> Block {
    Block::Code {
        language: language.map(str::to_string),
        code: body.into(),
    }
}

// Document-level behaviour

#[test]
fn empty_document() {
    assert!(parse_blocks("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_blocks("\n\n   \n\t\n").is_empty());
}

#[test]
fn document_carries_metadata() {
    let doc = parse_markdown_at("# x", 42);
    assert_eq!(doc.time, 42);
    assert_eq!(doc.version, crate::FORMAT_VERSION);
    assert_eq!(doc.blocks, vec![header(1, "x")]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_blocks("# Title\r\n\r\nline one\r\nline two\r\n"),
        vec![header(1, "Title"), paragraph("line one line two")]
    );
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    assert_eq!(
        parse_blocks("\u{feff}# Title\n\nbody"),
        vec![header(1, "Title"), paragraph("body")]
    );
}

// Headers

#[test]
fn header_then_paragraph() {
    assert_eq!(
        parse_blocks("# Title\n\nHello world"),
        vec![header(1, "Title"), paragraph("Hello world")]
    );
}

#[rstest]
#[case("# h", 1)]
#[case("## h", 2)]
#[case("###### h", 6)]
#[case("####### h", 6)]
#[case("############ h", 6)]
fn header_level_is_clamped(#[case] line: &str, #[case] level: u8) {
    assert_eq!(parse_blocks(line), vec![header(level, "h")]);
}

#[test]
fn header_without_text_is_dropped() {
    assert_eq!(
        parse_blocks("#\n\n##   \n\nafter"),
        vec![paragraph("after")]
    );
}

#[test]
fn header_text_is_inline_decoded() {
    assert_eq!(
        parse_blocks("## A **bold** move"),
        vec![header(2, "A <b>bold</b> move")]
    );
}

// Paragraphs

#[test]
fn paragraph_lines_join_with_single_space() {
    assert_eq!(
        parse_blocks("first line\n   second line  \nthird"),
        vec![paragraph("first line second line third")]
    );
}

#[rstest]
#[case("text\n# Head", vec![paragraph("text"), header(1, "Head")])]
#[case("text\n- item", vec![paragraph("text"), list(ListStyle::Unordered, &["item"])])]
#[case("text\n1. item", vec![paragraph("text"), list(ListStyle::Ordered, &["item"])])]
#[case("text\n---", vec![paragraph("text"), Block::Delimiter {}])]
#[case("text\n```\nx\n```", vec![paragraph("text"), code(None, "x")])]
#[case("text\n| a | b |", vec![paragraph("text"), table(&[&["a", "b"]])])]
fn paragraph_stops_at_other_grammars(#[case] md: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_blocks(md), expected);
}

#[test]
fn paragraph_stops_at_wiki_image() {
    assert_eq!(
        parse_blocks("text\n![[cat.png]]"),
        vec![
            paragraph("text"),
            Block::Image {
                url: "cat.png".into(),
                caption: "cat.png".into(),
                is_temporary: None
            }
        ]
    );
}

#[rstest]
#[case("a | b\nc | d", &["a | b", "c | d"])]
#[case("see ![a](b\nc) now", &["see ![a](b", "c) now"])]
#[case("one | two\nthree\nfour | five", &["one | two three", "four | five"])]
fn paragraph_splits_rather_than_join_into_other_grammar(
    #[case] md: &str,
    #[case] expected: &[&str],
) {
    let blocks = parse_blocks(md);
    assert_eq!(
        blocks,
        expected.iter().map(|t| paragraph(t)).collect::<Vec<_>>()
    );
    assert_eq!(parse_blocks(&crate::serialize_blocks(&blocks)), blocks);
}

#[test]
fn paragraph_text_is_inline_decoded() {
    assert_eq!(
        parse_blocks("a ==hi== b *c*"),
        vec![paragraph(r#"a <mark class="cdx-marker">hi</mark> b <i>c</i>"#)]
    );
}

// Lists

#[test]
fn lists_split_by_style() {
    assert_eq!(
        parse_blocks("- a\n- b\n\n1. x\n2. y"),
        vec![
            list(ListStyle::Unordered, &["a", "b"]),
            list(ListStyle::Ordered, &["x", "y"]),
        ]
    );
}

#[test]
fn style_change_without_blank_starts_new_list() {
    assert_eq!(
        parse_blocks("- a\n1. b\n- c"),
        vec![
            list(ListStyle::Unordered, &["a"]),
            list(ListStyle::Ordered, &["b"]),
            list(ListStyle::Unordered, &["c"]),
        ]
    );
}

#[test]
fn all_bullet_markers_share_a_list() {
    assert_eq!(
        parse_blocks("- a\n* b\n+ c"),
        vec![list(ListStyle::Unordered, &["a", "b", "c"])]
    );
}

#[test]
fn same_style_runs_split_by_blank_lines_merge() {
    assert_eq!(
        parse_blocks("- a\n\n- b\n\n\n- c"),
        vec![list(ListStyle::Unordered, &["a", "b", "c"])]
    );
}

#[test]
fn paragraph_between_lists_keeps_them_apart() {
    assert_eq!(
        parse_blocks("- a\n\nbetween\n\n- b"),
        vec![
            list(ListStyle::Unordered, &["a"]),
            paragraph("between"),
            list(ListStyle::Unordered, &["b"]),
        ]
    );
}

#[test]
fn list_items_are_inline_decoded() {
    assert_eq!(
        parse_blocks("1. **one**\n2. *two*"),
        vec![list(ListStyle::Ordered, &["<b>one</b>", "<i>two</i>"])]
    );
}

#[test]
fn list_then_header_flushes_list_first() {
    assert_eq!(
        parse_blocks("- a\n# H"),
        vec![list(ListStyle::Unordered, &["a"]), header(1, "H")]
    );
}

// Checklists

#[test]
fn checklist_run() {
    assert_eq!(
        parse_blocks("- [x] done\n- [ ] todo"),
        vec![Block::Checklist {
            items: vec![
                ChecklistItem::new("done", true),
                ChecklistItem::new("todo", false)
            ]
        }]
    );
}

#[test]
fn checklist_absorbs_blank_lines() {
    assert_eq!(
        parse_blocks("- [ ] a\n\n* [X] b\n\n\nafter"),
        vec![
            Block::Checklist {
                items: vec![ChecklistItem::new("a", false), ChecklistItem::new("b", true)]
            },
            paragraph("after"),
        ]
    );
}

#[test]
fn checklist_item_without_text_is_dropped() {
    assert_eq!(
        parse_blocks("- [ ] a\n- [x]\n- [ ] c"),
        vec![Block::Checklist {
            items: vec![ChecklistItem::new("a", false), ChecklistItem::new("c", false)]
        }]
    );
}

#[test]
fn checklist_of_only_empty_items_emits_nothing() {
    assert!(parse_blocks("- [ ]\n- [x]").is_empty());
}

#[test]
fn bullet_after_checklist_starts_a_list() {
    assert_eq!(
        parse_blocks("- [ ] task\n- plain"),
        vec![
            Block::Checklist {
                items: vec![ChecklistItem::new("task", false)]
            },
            list(ListStyle::Unordered, &["plain"]),
        ]
    );
}

// Tables

#[test]
fn table_with_separator() {
    assert_eq!(
        parse_blocks("| a | b |\n|---|---|\n| 1 | 2 |"),
        vec![table(&[&["a", "b"], &["1", "2"]])]
    );
}

#[test]
fn table_rows_are_padded_to_widest() {
    assert_eq!(
        parse_blocks("| a | b | c |\n|---|---|---|\n| 1 |\n| 2 | 3 |"),
        vec![table(&[&["a", "b", "c"], &["1", "", ""], &["2", "3", ""]])]
    );
}

#[test]
fn table_keeps_interior_empty_cells() {
    assert_eq!(
        parse_blocks("| a |  | c |"),
        vec![table(&[&["a", "", "c"]])]
    );
}

#[test]
fn first_table_row_is_never_a_separator() {
    assert_eq!(
        parse_blocks("|---|---|\n| 1 | 2 |"),
        vec![table(&[&["---", "---"], &["1", "2"]])]
    );
}

#[test]
fn table_ends_at_first_non_table_line() {
    assert_eq!(
        parse_blocks("| a | b |\n| 1 | 2 |\nafter\n| c | d |"),
        vec![
            table(&[&["a", "b"], &["1", "2"]]),
            paragraph("after"),
            table(&[&["c", "d"]]),
        ]
    );
}

#[test]
fn table_without_data_rows_emits_nothing() {
    assert_eq!(parse_blocks("| | |\n|---|---|\n\nnext"), vec![paragraph("next")]);
}

#[test]
fn table_cells_are_not_inline_decoded() {
    assert_eq!(
        parse_blocks("| **a** | <b> |"),
        vec![table(&[&["**a**", "<b>"]])]
    );
}

// Code

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        parse_blocks("```js\nconsole.log(1)\n```"),
        vec![code(Some("js"), "console.log(1)")]
    );
}

#[test]
fn code_body_is_raw() {
    assert_eq!(
        parse_blocks("```\n\n  # not a header\n- not a list\n**raw**\n\n```\nafter"),
        vec![
            code(None, "\n  # not a header\n- not a list\n**raw**\n"),
            paragraph("after")
        ]
    );
}

#[test]
fn unterminated_fence_takes_rest_of_input() {
    assert_eq!(
        parse_blocks("intro\n\n```python\nprint(1)\n\n# comment"),
        vec![paragraph("intro"), code(Some("python"), "print(1)\n\n# comment")]
    );
}

#[test]
fn empty_fence() {
    assert_eq!(parse_blocks("```\n```"), vec![code(None, "")]);
}

// Delimiters and images

#[rstest]
#[case("---")]
#[case("***")]
#[case("___")]
#[case("  ---  ")]
fn delimiter_spellings(#[case] md: &str) {
    assert_eq!(parse_blocks(md), vec![Block::Delimiter {}]);
}

#[test]
fn delimiter_flushes_list() {
    assert_eq!(
        parse_blocks("- a\n***\n- b"),
        vec![
            list(ListStyle::Unordered, &["a"]),
            Block::Delimiter {},
            list(ListStyle::Unordered, &["b"]),
        ]
    );
}

#[test]
fn standard_and_wiki_images() {
    assert_eq!(
        parse_blocks("![A cat](cat.png)\n![[dog.jpg]]"),
        vec![
            Block::Image {
                url: "cat.png".into(),
                caption: "A cat".into(),
                is_temporary: None
            },
            Block::Image {
                url: "dog.jpg".into(),
                caption: "dog.jpg".into(),
                is_temporary: None
            },
        ]
    );
}

// Degradation

#[rstest]
#[case("```")]
#[case("|")]
#[case("||||")]
#[case("- [")]
#[case("![")]
#[case("#")]
#[case("1.")]
#[case("**")]
#[case("==")]
#[case("\u{feff}")]
fn odd_input_does_not_panic(#[case] md: &str) {
    let _ = parse_blocks(md);
}
