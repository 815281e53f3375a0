// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_message(lines: usize) -> String {
    let base = [
        "hey **everyone**, check _this_ out",
        "> quoting the ||spoiler|| from before",
        "- remember `cargo fmt` and ~~panic~~",
        "see [the docs](https://docs.rs/regex) or https://example.com/a?b=c",
        "![screenshot](https://cdn.example.com/s.png) ***wow*** __nice__",
        "",
        "1. first >!hidden!< item",
        "plain words with no markup at all, just typing along",
    ];
    (0..lines)
        .map(|i| base[i % base.len()])
        .collect::<Vec<_>>()
        .join("\n")
}

/// One long line of `unit` repeated, e.g. unmatched openers.
#[allow(dead_code)]
pub fn generate_long_line(unit: &str, bytes: usize) -> String {
    unit.repeat(bytes / unit.len().max(1))
}
