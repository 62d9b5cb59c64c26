//! Document tokenization.
//!
//! The graph vocabulary is lowercase alphabetic words: every character
//! outside `A-Z a-z` acts as a separator, mirroring how the source
//! documents are preprocessed. [`split_words`] keeps the original casing
//! for callers that echo the input back (text expansion); [`tokenize`]
//! folds to lowercase for graph construction and lookups.

/// Splits `text` into alphabetic words, preserving their original casing.
///
/// Every non-letter character is treated as whitespace, so punctuation and
/// digits separate words and never appear in the output.
pub fn split_words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Splits `text` into lowercase alphabetic tokens, the form
/// [`GraphBuilder`](crate::builder::GraphBuilder) consumes.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = split_words(text);
    for word in &mut words {
        word.make_ascii_lowercase();
    }
    words
}
