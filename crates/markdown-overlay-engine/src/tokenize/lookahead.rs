/// Memoized "next occurrence" search over one line.
///
/// Every closing-delimiter search in the tokenizer asks the same question:
/// where is the first `pat` at or after byte `from`? The answer for a later
/// `from` can be read off an earlier answer as long as the earlier hit is
/// still ahead of it, and since the scan cursor only moves forward, each
/// pattern's search region is walked at most once per line. This keeps a
/// line full of unmatched openers (`[[[[...`, `____...`) linear.
pub struct Lookahead<'a> {
    bytes: &'a [u8],
    memo: Vec<Memo>,
}

struct Memo {
    pat: &'static [u8],
    from: usize,
    hit: Option<usize>,
}

impl<'a> Lookahead<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
            memo: Vec::new(),
        }
    }

    /// Byte index of the first `pat` starting at or after `from`.
    pub fn find(&mut self, pat: &'static [u8], from: usize) -> Option<usize> {
        let bytes = self.bytes;
        match self.memo.iter_mut().find(|m| m.pat == pat) {
            Some(m) => {
                if m.from <= from {
                    match m.hit {
                        None => return None,
                        Some(hit) if hit >= from => return Some(hit),
                        Some(_) => {}
                    }
                }
                let hit = search(bytes, pat, from);
                m.from = from;
                m.hit = hit;
                hit
            }
            None => {
                let hit = search(bytes, pat, from);
                self.memo.push(Memo { pat, from, hit });
                hit
            }
        }
    }
}

fn search(bytes: &[u8], pat: &[u8], from: usize) -> Option<usize> {
    if pat.is_empty() || from > bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(pat.len())
        .position(|w| w == pat)
        .map(|p| from + p)
}
