//! Plain-text helpers used to lay out documents.
//!
//! Everything here is pure: same input, same output.

/// Separator placed between two rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Prefixes every line of `text` (empty lines included) with `n` spaces.
///
/// Lines are split on `'\n'` only, so indenting twice is the same as indenting
/// once by the sum: `indent(&indent(t, a), b) == indent(t, a + b)`.
pub fn indent(text: &str, n: usize) -> String {
    if n == 0 {
        return text.to_string();
    }

    let pad = " ".repeat(n);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns true when `text` has nothing but whitespace in it.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Joins the non-blank `blocks` with a blank line between each of them.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .filter(|b| !is_blank(b.as_ref()))
        .map(|b| b.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
