use std::fmt::Write;

use crate::{
    compose::{OverlayDocument, OverlayItem},
    style::{FontSlant, FontWeight, Style, TextDecoration},
};

/// Renders the overlay as a single `white-space: pre-wrap` block.
///
/// Every segment becomes one `<span>` with inline CSS and line breaks are
/// literal `\n`, so the text lays out exactly like the raw input under it.
pub fn to_html(doc: &OverlayDocument) -> String {
    let mut out = String::from(r#"<div style="white-space: pre-wrap">"#);
    for item in doc.items() {
        match item {
            OverlayItem::Line(line) => {
                for s in &line.segments {
                    let _ = write!(
                        out,
                        r#"<span style="{}">{}</span>"#,
                        html_escape::encode_double_quoted_attribute(&css(&s.style)),
                        html_escape::encode_text(&s.segment.text)
                    );
                }
            }
            OverlayItem::LineBreak => out.push('\n'),
        }
    }
    out.push_str("</div>");
    out
}

/// Inline CSS declarations for a style.
pub fn css(style: &Style) -> String {
    let mut decls = vec![format!("color: {}", style.color)];
    if let Some(bg) = style.background {
        decls.push(format!("background-color: {bg}"));
    }
    if style.weight == FontWeight::Bold {
        decls.push("font-weight: bold".to_string());
    }
    if style.slant == FontSlant::Italic {
        decls.push("font-style: italic".to_string());
    }
    match style.decoration {
        TextDecoration::None => {}
        TextDecoration::Underline => decls.push("text-decoration: underline".to_string()),
        TextDecoration::LineThrough => decls.push("text-decoration: line-through".to_string()),
    }
    decls.push(format!("font-family: {}", style.font_family));
    decls.join("; ")
}
