use thiserror::Error;

use super::distance::fold_case;
use crate::definition::Term;
use crate::text::{Token, Tokenizer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern {pattern:?} in classification {classification:?} contains no tokens")]
    Empty {
        classification: String,
        pattern: String,
    },
}

impl PatternError {
    /// Attach the owning classification's name.
    pub fn in_classification(self, name: &str) -> Self {
        match self {
            PatternError::Empty { pattern, .. } => PatternError::Empty {
                classification: name.to_string(),
                pattern,
            },
        }
    }
}

/// A literal pattern word, case-folded once at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralWord {
    text: String,
    folded: Box<[char]>,
}

impl LiteralWord {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = fold_case(&text).into_boxed_slice();
        Self { text, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn folded(&self) -> &[char] {
        &self.folded
    }
}

/// One position of a compiled pattern. Consumes exactly one document token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Literal { word: LiteralWord, max_distance: usize },
    /// `*`
    AnyToken,
    /// `?`
    NonNumericToken,
    /// `#`
    NumericToken,
}

impl Matcher {
    fn wildcard(word: &str) -> Option<Self> {
        match word {
            "*" => Some(Matcher::AnyToken),
            "?" => Some(Matcher::NonNumericToken),
            "#" => Some(Matcher::NumericToken),
            _ => None,
        }
    }
}

fn is_wildcard_char(c: char) -> bool {
    matches!(c, '*' | '?' | '#')
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    pub source: String,
    pub matchers: Vec<Matcher>,
}

impl CompiledPattern {
    /// Compile a term's pattern. Wildcard markers are recognized before
    /// normalization, with surrounding punctuation ignored (`#.` and `(*)`
    /// are wildcards). Every other word goes through the tokenizer so
    /// literals are compared in the same form as document tokens.
    pub fn compile<T: Tokenizer>(tokenizer: &T, term: &Term) -> Result<Self, PatternError> {
        let max_distance = term.distance as usize;
        let mut matchers = Vec::new();

        for word in term.pattern.split_whitespace() {
            let core = word.trim_matches(|c: char| !c.is_alphanumeric() && !is_wildcard_char(c));
            if let Some(wildcard) = Matcher::wildcard(core) {
                matchers.push(wildcard);
                continue;
            }
            for Token { text, .. } in tokenizer.tokenize(word) {
                matchers.push(Matcher::Literal {
                    word: LiteralWord::new(text),
                    max_distance,
                });
            }
        }

        if matchers.is_empty() {
            return Err(PatternError::Empty {
                classification: String::new(),
                pattern: term.pattern.clone(),
            });
        }

        Ok(Self {
            source: term.pattern.clone(),
            matchers,
        })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
