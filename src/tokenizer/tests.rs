use super::*;

#[test]
fn test_stopword_and_digit_filtering() {
    assert_eq!(tokenize("The cat sat on 123 mats"), vec!["cat", "sat", "mats"]);
}

#[test]
fn test_lowercases_input() {
    assert_eq!(tokenize("Rust COMPILER Errors"), vec!["rust", "compiler", "errors"]);
}

#[test]
fn test_punctuation_separates_tokens() {
    assert_eq!(
        tokenize("borrow-checker: lifetimes, traits!"),
        vec!["borrow", "checker", "lifetimes", "traits"]
    );
}

#[test]
fn test_keeps_duplicates_in_order() {
    assert_eq!(
        tokenize("cache miss cache hit cache"),
        vec!["cache", "miss", "cache", "hit", "cache"]
    );
}

#[test]
fn test_mixed_alphanumeric_survives() {
    // Only all-digit tokens are removed
    assert_eq!(tokenize("utf8 v10 404 x86"), vec!["utf8", "v10", "x86"]);
}

#[test]
fn test_non_ascii_is_separator() {
    assert_eq!(tokenize("café naïve 世界 résumé"), vec!["caf", "sum"]);
}

#[test]
fn test_short_tokens_dropped() {
    assert!(tokenize("go to db is ok").is_empty());
}

#[test]
fn test_min_token_len() {
    assert_eq!(MIN_TOKEN_LEN, 3);
    assert_eq!(tokenize("abc ab"), vec!["abc"]);
}
