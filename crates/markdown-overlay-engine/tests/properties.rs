use markdown_overlay_engine::{Composer, compose, snapshot, tokenize};
use proptest::prelude::*;
use rstest::rstest;

/// Markup-heavy text: delimiters, brackets, schemes and some multibyte chars.
const MARKUP: &str = r"[*_~`>!|()\[\]a-c :/.\-\n1é🎉h]{0,64}";

proptest! {
    #[test]
    fn overlay_covers_every_line(raw in MARKUP) {
        let doc = compose(&raw);
        snapshot::invariants(&raw, &doc);
    }

    #[test]
    fn arbitrary_text_never_breaks_coverage(raw in any::<String>()) {
        snapshot::invariants(&raw, &compose(&raw));
    }

    #[test]
    fn compose_is_deterministic(raw in MARKUP) {
        prop_assert_eq!(compose(&raw), compose(&raw));
    }

    #[test]
    fn cache_never_changes_output(edits in prop::collection::vec(MARKUP, 1..8)) {
        let mut cached = Composer::default().with_cache(8);
        for raw in &edits {
            prop_assert_eq!(cached.compose(raw), compose(raw));
        }
    }

    #[test]
    fn verbatim_lines_display_their_source(line in r"[*_~`|()\[\]a-c :]{0,48}") {
        // No `!`, `>`, `-` or digits: no images, blockquotes or list lines
        let text: String = tokenize(&line).into_iter().map(|s| s.text).collect();
        prop_assert_eq!(text, line);
    }
}

#[rstest]
#[case("[")]
#[case("_")]
#[case("**a")]
#[case("![")]
#[case("~~x")]
#[case("||")]
#[case("`")]
#[case("[a](")]
#[case(">!")]
fn long_adversarial_lines_stay_covered(#[case] unit: &str) {
    let raw = unit.repeat(20_000);
    snapshot::invariants(&raw, &compose(&raw));
}
