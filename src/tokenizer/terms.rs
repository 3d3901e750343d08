use super::{MIN_TOKEN_LEN, Term, is_stopword};

/// Normalize raw text into an ordered sequence of terms.
///
/// Rules:
/// - Lower-case the whole text
/// - Candidate tokens are maximal runs of ASCII letters/digits
/// - Pure-digit tokens are discarded
/// - Tokens shorter than `MIN_TOKEN_LEN` are discarded
/// - Stopwords are discarded
///
/// Duplicates are kept since term frequency matters downstream.
pub fn tokenize(text: &str) -> Vec<Term> {
    let lower = text.to_lowercase();

    lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|candidate| !candidate.is_empty())
        .map(collapse_digits)
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Trim surrounding whitespace and byte-order marks.
///
/// `str::trim` keeps U+FEFF, so a message holding only a BOM would otherwise
/// count as content.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Pure-digit tokens collapse to the empty string so the length filter drops them
fn collapse_digits(token: &str) -> &str {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        ""
    } else {
        token
    }
}
