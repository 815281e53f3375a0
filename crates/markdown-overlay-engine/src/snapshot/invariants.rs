use crate::compose::OverlayDocument;

/// Panics if `doc` is not a faithful overlay of `raw`.
///
/// Checks, per line:
/// - one overlay line per `\n`-separated raw line, in order
/// - segment spans are contiguous and cover the raw line exactly
/// - verbatim kinds display exactly the source they span, while image and
///   blockquote segments display a substring of it
/// - `order` counts up from 0 and `line` matches the line index
pub fn check(raw: &str, doc: &OverlayDocument) {
    let raw_lines: Vec<&str> = raw.split('\n').collect();
    assert_eq!(
        doc.lines.len(),
        raw_lines.len(),
        "line count mismatch for {raw:?}"
    );

    for (i, (line, text)) in doc.lines.iter().zip(&raw_lines).enumerate() {
        assert_eq!(line.index, i, "line index out of order");
        assert_eq!(line.raw, *text, "line {i} raw text differs");

        let mut at = 0;
        for (n, s) in line.segments.iter().enumerate() {
            let seg = &s.segment;
            assert_eq!(seg.order, n, "line {i}: segment order gap at {n}");
            assert_eq!(seg.line, i, "line {i}: segment {n} stamped {}", seg.line);
            assert_eq!(
                seg.span.start, at,
                "line {i}: segment {n} starts at {} not {at}",
                seg.span.start
            );
            assert!(
                seg.span.end <= text.len() && text.is_char_boundary(seg.span.end),
                "line {i}: segment {n} span {:?} out of bounds",
                seg.span
            );

            let source = seg.span.slice(text);
            if seg.kind.is_verbatim() {
                assert_eq!(seg.text, source, "line {i}: segment {n} text differs");
            } else {
                assert!(
                    source.contains(seg.text.as_str()),
                    "line {i}: {} text {:?} not within {source:?}",
                    seg.kind,
                    seg.text
                );
            }
            at = seg.span.end;
        }
        assert_eq!(at, text.len(), "line {i}: segments stop at {at}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{OverlayLine, compose};

    #[test]
    fn composed_documents_pass() {
        let raw = "> q\n- l\n**b** ![i](u) [t](u)\n\n`c`";
        check(raw, &compose(raw));
    }

    #[test]
    #[should_panic(expected = "line count mismatch")]
    fn missing_line_is_caught() {
        let mut doc = compose("a\nb");
        doc.lines.pop();
        check("a\nb", &doc);
    }

    #[test]
    #[should_panic(expected = "segments stop at")]
    fn uncovered_tail_is_caught() {
        let mut doc = compose("ab");
        doc.lines[0] = OverlayLine {
            raw: "ab".to_string(),
            ..compose("a").lines.remove(0)
        };
        check("ab", &doc);
    }
}
