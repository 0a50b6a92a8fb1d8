//! Display-width helpers for strings that mix narrow and East Asian wide text.

use crate::east_asian;

/// Terminal cells taken by `c`: 2 when its East Asian Width class is
/// Fullwidth, Wide or Ambiguous, else 1.
///
/// The class decides, not the rendered width: an ambiguous combining mark
/// still counts as 2.
pub fn char_width(c: char) -> usize {
    if east_asian::is_wide_or_ambiguous(c) {
        2
    } else {
        1
    }
}

/// Display width of `text`. An empty string has width 0.
pub fn width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Largest display width in `texts`, or `None` when empty.
pub fn max_width<I, S>(texts: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().map(|t| width(t.as_ref())).max()
}

/// Smallest display width in `texts`, or `None` when empty.
pub fn min_width<I, S>(texts: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().map(|t| width(t.as_ref())).min()
}

/// Reverses `text` by code point.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
