use crate::{
    style::StyleTable,
    tokenize::{Segment, tokenize_line},
};

use super::{
    cache::{CacheStats, LineCache},
    document::{OverlayDocument, OverlayLine, StyledSegment},
};

/// Composes `buffer` with the stock styles and no cache.
pub fn compose(buffer: &str) -> OverlayDocument {
    Composer::default().compose(buffer)
}

/// Turns a whole buffer into an [`OverlayDocument`].
///
/// Holds the style table and, optionally, a [`LineCache`] that survives
/// between calls so unchanged lines are not re-tokenized on every keystroke.
#[derive(Debug, Default)]
pub struct Composer {
    styles: StyleTable,
    cache: Option<LineCache>,
}

impl Composer {
    pub fn new(styles: StyleTable) -> Self {
        Self {
            styles,
            cache: None,
        }
    }

    /// Enables the per-line cache, holding at most `capacity` lines.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = Some(LineCache::new(capacity));
        self
    }

    /// Cache counters, or `None` when caching is off.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(LineCache::stats)
    }

    /// Splits `buffer` on `\n` and styles every line.
    ///
    /// N raw lines always give N [`OverlayLine`]s, empty ones included, so
    /// `"a\n"` has two lines. A `\r` is ordinary line content.
    pub fn compose(&mut self, buffer: &str) -> OverlayDocument {
        if let Some(cache) = &mut self.cache {
            cache.begin_pass();
        }

        let styles = &self.styles;
        let cache = &mut self.cache;
        let lines: Vec<OverlayLine> = buffer
            .split('\n')
            .enumerate()
            .map(|(index, raw)| {
                let segments = match cache.as_mut() {
                    Some(cache) => cache.segments(index, raw),
                    None => tokenize_line(index, raw),
                };
                OverlayLine {
                    index,
                    raw: raw.to_string(),
                    segments: apply_styles(styles, segments),
                }
            })
            .collect();

        if let Some(cache) = &mut self.cache {
            cache.end_pass();
            let stats = cache.stats();
            log::trace!(
                "composed {} lines (cache hits {}, misses {})",
                lines.len(),
                stats.hits,
                stats.misses
            );
        } else {
            log::trace!("composed {} lines", lines.len());
        }

        OverlayDocument { lines }
    }
}

fn apply_styles(styles: &StyleTable, segments: Vec<Segment>) -> Vec<StyledSegment> {
    segments
        .into_iter()
        .map(|segment| StyledSegment {
            style: styles.get(segment.kind).clone(),
            segment,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::{Color, Style},
        tokenize::SegmentKind,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 1)]
    #[case("a", 1)]
    #[case("a\n", 2)]
    #[case("a\n**b**\n", 3)]
    #[case("\n\n\n", 4)]
    fn line_count_follows_newlines(#[case] buffer: &str, #[case] lines: usize) {
        assert_eq!(compose(buffer).line_count(), lines);
    }

    #[test]
    fn empty_lines_have_no_segments() {
        let doc = compose("a\n\nb");
        assert!(doc.lines[1].segments.is_empty());
        assert_eq!(doc.lines[1].raw, "");
    }

    #[test]
    fn segments_carry_their_line_index() {
        let doc = compose("x\n_y_\nz");
        for line in &doc.lines {
            assert!(line.segments.iter().all(|s| s.segment.line == line.index));
        }
    }

    #[test]
    fn carriage_return_stays_in_the_line() {
        let doc = compose("a\r\nb");
        assert_eq!(doc.lines[0].raw, "a\r");
        assert_eq!(doc.display_text(), "a\r\nb");
    }

    #[test]
    fn styles_come_from_the_table() {
        let mut styles = StyleTable::default();
        let red = Style::plain("serif").with_color(Color::rgb(0xff, 0, 0));
        styles.set(SegmentKind::Bold, red.clone());

        let doc = Composer::new(styles).compose("**b**");
        let bold = &doc.lines[0].segments[1];
        assert_eq!(bold.segment.kind, SegmentKind::Bold);
        assert_eq!(bold.style, red);
        assert_eq!(
            &doc.lines[0].segments[0].style,
            StyleTable::default().get(SegmentKind::PlainText)
        );
    }

    #[test]
    fn cached_composer_matches_uncached() {
        let buffer = "**a**\n_b_\n**a**\n> q\n- l";
        let mut cached = Composer::default().with_cache(16);
        let first = cached.compose(buffer);
        let second = cached.compose(buffer);
        assert_eq!(first, compose(buffer));
        assert_eq!(second, compose(buffer));

        let stats = cached.cache_stats().expect("cache enabled");
        // Duplicate `**a**` hits on the first pass, all five lines on the second
        assert_eq!(stats.hits, 6);
        assert_eq!(stats.misses, 4);
        assert_eq!(stats.entries, 4);
    }

    #[test]
    fn editing_a_line_evicts_its_old_text() {
        let mut composer = Composer::default().with_cache(16);
        composer.compose("one\ntwo");
        composer.compose("one\ntwo!");
        assert_eq!(composer.cache_stats().map(|s| s.entries), Some(2));
    }

    #[test]
    fn no_cache_stats_without_cache() {
        assert_eq!(Composer::default().cache_stats(), None);
    }
}
