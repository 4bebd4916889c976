//! Prefix-free filter — keeps only candidates no earlier element prefixes.

/// Iterator adapter yielding the prefix-free subsequence of its input.
///
/// A candidate is kept iff no previously kept element is a prefix of it,
/// so the yielded set is pairwise prefix-free and preserves input order.
/// The `seen` list is owned by this instance; independent filter runs
/// never share state.
#[derive(Debug, Clone)]
pub struct PrefixFree<I> {
    inner: I,
    seen: Vec<String>,
}

pub fn prefix_free<I>(inner: I) -> PrefixFree<I>
where
    I: Iterator<Item = String>,
{
    PrefixFree {
        inner,
        seen: Vec::new(),
    }
}

impl<I> Iterator for PrefixFree<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // Linear scan is fine: only as many codes are ever accepted as the
        // input text has distinct symbols.
        for candidate in self.inner.by_ref() {
            if !self.seen.iter().any(|p| candidate.starts_with(p.as_str())) {
                self.seen.push(candidate.clone());
                return Some(candidate);
            }
        }
        None
    }
}
