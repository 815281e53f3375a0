use markdown_overlay_engine::{
    Composer, OverlayItem, SegmentKind, StyleTable, compose,
    snapshot::{self, normalize},
};
use pretty_assertions::assert_eq;

fn snap(raw: &str) -> String {
    let doc = compose(raw);
    snapshot::invariants(raw, &doc);
    normalize(&doc).to_string()
}

#[test]
fn bold_and_italic() {
    insta::assert_snapshot!(snap("**bold** and _ital_"), @r#"
    0 "**bold** and _ital_"
      plain_text 0..2 "**"
      bold 2..6 "bold"
      plain_text 6..8 "**"
      plain_text 8..13 " and "
      plain_text 13..14 "_"
      italic 14..18 "ital"
      plain_text 18..19 "_"
    "#);
}

#[test]
fn trailing_newline_gives_empty_last_line() {
    insta::assert_snapshot!(snap("a\n**b**\n"), @r#"
    0 "a"
      plain_text 0..1 "a"
    1 "**b**"
      plain_text 0..2 "**"
      bold 2..3 "b"
      plain_text 3..5 "**"
    2 ""
    "#);
}

#[test]
fn line_kinds_and_links() {
    insta::assert_snapshot!(snap("> quoted\n- item\n![cat](u.png) [here](https://x.y)"), @r#"
    0 "> quoted"
      blockquote_line 0..8 "quoted"
    1 "- item"
      list_line 0..6 "- item"
    2 "![cat](u.png) [here](https://x.y)"
      image_alt 0..13 "cat"
      plain_text 13..14 " "
      plain_text 14..15 "["
      link_text 15..19 "here"
      plain_text 19..33 "](https://x.y)"
    "#);
}

#[test]
fn inline_and_fenced_code() {
    insta::assert_snapshot!(snap("`x` ```f```"), @r#"
    0 "`x` ```f```"
      plain_text 0..1 "`"
      inline_code 1..2 "x"
      plain_text 2..3 "`"
      plain_text 3..4 " "
      plain_text 4..7 "```"
      fenced_code 7..8 "f"
      plain_text 8..11 "```"
    "#);
}

#[test]
fn autolink_runs_to_whitespace() {
    insta::assert_snapshot!(snap("see https://a.b/c. ok"), @r#"
    0 "see https://a.b/c. ok"
      plain_text 0..4 "see "
      auto_link_url 4..18 "https://a.b/c."
      plain_text 18..21 " ok"
    "#);
}

#[test]
fn every_line_break_is_an_item() {
    let doc = compose("a\n\nb");
    let breaks = doc
        .items()
        .filter(|i| matches!(i, OverlayItem::LineBreak))
        .count();
    assert_eq!(breaks, 2);
    assert_eq!(doc.display_text(), "a\n\nb");
}

#[test]
fn blockquote_and_image_shorten_display_text() {
    let doc = compose("> hi\n![alt](x)");
    assert_eq!(doc.display_text(), "hi\nalt");
}

#[test]
fn every_kind_has_a_style() {
    let table = StyleTable::default();
    assert_eq!(table.iter().count(), SegmentKind::COUNT);
    for kind in SegmentKind::ALL {
        // Lookup never panics and the composer hands out the same style
        let _ = table.get(kind);
    }
    let doc = Composer::new(table.clone()).compose("~~s~~");
    assert_eq!(
        &doc.lines[0].segments[1].style,
        table.get(SegmentKind::Strikethrough)
    );
}

#[test]
fn thousands_of_short_lines() {
    let raw = "**a** _b_ `c`\n".repeat(5_000);
    let doc = compose(&raw);
    assert_eq!(doc.line_count(), 5_001);
    snapshot::invariants(&raw, &doc);
}
