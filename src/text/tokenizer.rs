use serde::{Deserialize, Serialize};

/// A normalized word from a document or pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// True iff the token contains at least one digit. Any Unicode numeric
    /// char counts (`char::is_numeric`), so `٢٠٢٤` is numeric like `2024`.
    pub is_numeric: bool,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_numeric = text.chars().any(|c| c.is_numeric());
        Self { text, is_numeric }
    }
}

pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// v0: whitespace split, lowercase, edge punctuation stripped.
///
/// Internal punctuation survives, so `EN-15804` stays one token and
/// `1,500.00` stays numeric. Words made only of punctuation are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .filter_map(normalize_word)
            .collect()
    }
}

fn normalize_word(word: &str) -> Option<Token> {
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(Token::new(trimmed.to_lowercase()))
    }
}
