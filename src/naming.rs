//! Identifier derivation and string helpers exposed to templates.
//!
//! All functions here are pure. The renderer registers them under fixed names
//! (`func_name`, `sub`, `substr`, `bytelen`, `tolower`, `strtitle`) so
//! templates can call them inline, and `rust_ident` as a filter.

use crate::error::{Error, Result};

/// Characters that separate path segments during name derivation.
const SEGMENT_SEPARATORS: [char; 2] = ['/', '-'];

/// Joiner placed between transformed path segments.
const SEGMENT_JOINER: &str = "_";

/// Derives a callable name from an HTTP method and a path.
///
/// The method is used verbatim as the prefix. The path loses its leading `/`,
/// the rest is split on `/` and `-`, each segment is lowercased with its first
/// character uppercased, and the segments are joined with `_`.
///
/// The root path yields a single empty segment, so `GET /` becomes `GET`.
///
/// # Errors
/// * `Error::NamingError` if `path` does not start with `/`
///
/// # Example
/// ```
/// assert_eq!(apigen::naming::func_name("POST", "/auth/login").unwrap(), "POSTAuth_Login");
/// ```
pub fn func_name(method: &str, path: &str) -> Result<String> {
    let rest = path.strip_prefix('/').ok_or_else(|| {
        Error::NamingError(format!("path '{path}' of {method} endpoint must start with '/'"))
    })?;

    let segments: Vec<String> = rest.split(SEGMENT_SEPARATORS).map(capitalize_segment).collect();

    Ok(format!("{method}{}", segments.join(SEGMENT_JOINER)))
}

/// Lowercases the whole segment, then title-cases its first character.
fn capitalize_segment(segment: &str) -> String {
    let lower = segment.to_lowercase();
    let mut chars = lower.chars();
    let mut capitalized = String::with_capacity(lower.len());
    if let Some(first) = chars.next() {
        push_title_case(&mut capitalized, first);
        capitalized.extend(chars);
    }
    capitalized
}

/// Integer subtraction for index arithmetic inside templates.
///
/// # Errors
/// * `Error::IndexError` on overflow
pub fn sub(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b)
        .ok_or_else(|| Error::IndexError(format!("{a} - {b} overflows")))
}

/// Returns the bytes of `s` in `[start, end)`.
///
/// Offsets are byte offsets. Nothing is clamped: an offset past the end, a
/// start after the end, a negative offset, or an offset inside a multi-byte
/// character is an error.
///
/// # Errors
/// * `Error::IndexError` if the range is not a valid slice of `s`
pub fn substr(s: &str, start: i64, end: i64) -> Result<String> {
    let out_of_range = || {
        Error::IndexError(format!(
            "slice bounds out of range [{start}:{end}] with length {}",
            s.len()
        ))
    };

    let start = usize::try_from(start).map_err(|_| out_of_range())?;
    let end = usize::try_from(end).map_err(|_| out_of_range())?;
    if start > end || end > s.len() {
        return Err(out_of_range());
    }

    s.get(start..end).map(str::to_string).ok_or_else(|| {
        Error::IndexError(format!(
            "slice [{start}:{end}] of '{s}' does not fall on character boundaries"
        ))
    })
}

/// Length of `s` in bytes, the unit [`substr`] offsets are measured in.
pub fn bytelen(s: &str) -> usize {
    s.len()
}

/// Words that cannot be used as plain Rust identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that are not accepted even as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Escapes `name` so it can be used as a Rust field or function name.
///
/// Keywords become raw identifiers (`type` → `r#type`); the few keywords that
/// cannot be raw get a trailing underscore (`self` → `self_`).
pub fn rust_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Lowercase case-folding.
pub fn tolower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercases the first letter of every word, leaving the rest untouched.
///
/// Words are delimited by whitespace and by ASCII characters other than
/// letters, digits and `_`.
pub fn strtitle(s: &str) -> String {
    let mut previous = ' ';
    let mut title = String::with_capacity(s.len());
    for c in s.chars() {
        if is_word_separator(previous) {
            push_title_case(&mut title, c);
        } else {
            title.push(c);
        }
        previous = c;
    }
    title
}

/// Appends the title case form of `c`.
///
/// Differs from uppercasing only for the Latin digraphs, whose title case is a
/// distinct code point (`ǆ` → `ǅ`, not `Ǆ`).
fn push_title_case(out: &mut String, c: char) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        _ => out.extend(c.to_uppercase()),
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
