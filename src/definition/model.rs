use serde::{Deserialize, Serialize};

/// A named collection of classifications, the unit of import/export.
///
/// The engine only reads a set; creating and mutating one is the job of
/// whatever persistence layer owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub classifiers: Vec<Classification>,
}

/// A named category, scored independently against a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// One matching rule: a pattern, a per-literal edit tolerance and a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Whitespace-delimited literal words and wildcard markers (`*`, `?`, `#`).
    #[serde(rename = "term")]
    pub pattern: String,
    /// Maximum Levenshtein distance tolerated for every literal in the pattern.
    pub distance: u32,
    pub weight: f64,
}

impl ClassifierSet {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            classifiers: Vec::new(),
        }
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classifiers.push(classification);
        self
    }
}

impl Classification {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            terms: Vec::new(),
        }
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }
}

impl Term {
    pub fn new(pattern: impl Into<String>, distance: u32, weight: f64) -> Self {
        Self {
            pattern: pattern.into(),
            distance,
            weight,
        }
    }
}
