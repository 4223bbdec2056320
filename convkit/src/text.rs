//! String helpers.
//!
//! Lengths, indices and reversal work on Unicode scalar values (`char`), not bytes, so `"héllo"` has five characters
//! and reverses to `"olléh"`.

use thiserror::Error;

/// Errors raised by the string helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    /// [`split_string`] was given an empty delimiter.
    #[error("empty separator")]
    EmptyDelimiter,
}

/// Concatenates two strings.
///
/// ```rust
/// assert_eq!(convkit::text::concatenate("Hello", "World"), "HelloWorld");
/// ```
pub fn concatenate(first: &str, second: &str) -> String {
    let mut out = String::with_capacity(first.len() + second.len());
    out.push_str(first);
    out.push_str(second);
    out
}

/// Uppercases a string.
///
/// ```rust
/// assert_eq!(convkit::text::to_uppercase("hello"), "HELLO");
/// ```
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Lowercases a string.
///
/// ```rust
/// assert_eq!(convkit::text::to_lowercase("HELLO"), "hello");
/// ```
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Reverses the characters of a string.
///
/// ```rust
/// assert_eq!(convkit::text::reverse_string("hello"), "olleh");
/// ```
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of characters in a string.
///
/// ```rust
/// assert_eq!(convkit::text::count_characters("hello"), 5);
/// ```
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-separated words.
///
/// ```rust
/// assert_eq!(convkit::text::count_words("hello world"), 2);
/// assert_eq!(convkit::text::count_words("   "), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Replaces every occurrence of `old` with `new`.
///
/// ```rust
/// assert_eq!(convkit::text::replace_substring("hello world", "world", "Rust"), "hello Rust");
/// ```
pub fn replace_substring(text: &str, old: &str, new: &str) -> String {
    text.replace(old, new)
}

/// Splits a string on every occurrence of `delimiter`, keeping empty pieces.
///
/// # Errors
///
/// [`TextError::EmptyDelimiter`] if `delimiter` is empty.
///
/// ```rust
/// use convkit::text::split_string;
///
/// assert_eq!(split_string("hello,world", ",")?, vec!["hello", "world"]);
/// assert_eq!(split_string("a,,b", ",")?, vec!["a", "", "b"]);
/// assert!(split_string("abc", "").is_err());
/// # Ok::<(), convkit::text::TextError>(())
/// ```
pub fn split_string<'a>(text: &'a str, delimiter: &str) -> Result<Vec<&'a str>, TextError> {
    if delimiter.is_empty() {
        return Err(TextError::EmptyDelimiter);
    }
    Ok(text.split(delimiter).collect())
}

/// Joins strings with a separator.
///
/// ```rust
/// assert_eq!(convkit::text::join_strings(&["hello", "world"], " "), "hello world");
/// ```
pub fn join_strings<S: AsRef<str>>(strings: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, s) in strings.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(s.as_ref());
    }
    out
}

/// Whether `text` starts with `prefix`.
///
/// ```rust
/// assert!(convkit::text::starts_with("hello world", "hello"));
/// ```
pub fn starts_with(text: &str, prefix: &str) -> bool {
    text.starts_with(prefix)
}

/// Whether `text` ends with `suffix`.
///
/// ```rust
/// assert!(convkit::text::ends_with("hello world", "world"));
/// ```
pub fn ends_with(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix)
}

/// Whether `text` contains `substring`.
///
/// ```rust
/// assert!(convkit::text::contains_substring("hello world", "lo wo"));
/// ```
pub fn contains_substring(text: &str, substring: &str) -> bool {
    text.contains(substring)
}

/// Extracts the characters in `start..end`.
///
/// Negative indices count back from the end of the string and out-of-range indices are clamped, so this never fails.
/// `end = None` runs to the end of the string.
///
/// ```rust
/// use convkit::text::get_substring;
///
/// assert_eq!(get_substring("hello world", 0, Some(5)), "hello");
/// assert_eq!(get_substring("hello world", 6, None), "world");
/// assert_eq!(get_substring("hello world", -5, None), "world");
/// assert_eq!(get_substring("hello", 3, Some(1)), "");
/// ```
pub fn get_substring(text: &str, start: isize, end: Option<isize>) -> String {
    let len = count_characters(text);
    let start = clamp_index(start, len);
    let end = end.map_or(len, |end| clamp_index(end, len));
    if start >= end {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}

fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Whether `text` is non-empty and every character is numeric.
///
/// ```rust
/// assert!(convkit::text::is_numeric("12345"));
/// assert!(!convkit::text::is_numeric("12.5"));
/// assert!(!convkit::text::is_numeric(""));
/// ```
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// Whether `text` is non-empty and every character is alphabetic.
///
/// ```rust
/// assert!(convkit::text::is_alphabetic("hello"));
/// assert!(!convkit::text::is_alphabetic("hello world"));
/// ```
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}
