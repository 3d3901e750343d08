mod stopwords;
mod terms;

#[cfg(test)]
mod tests;

pub use stopwords::{STOPWORDS, is_stopword};
pub use terms::{tokenize, trim_blank};

/// A normalized term produced by the tokenizer
pub type Term = String;

/// Tokens shorter than this are dropped
pub const MIN_TOKEN_LEN: usize = 3;
