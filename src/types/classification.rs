use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::identifiers::DefinitionVersion;

/// Classification name -> accumulated score, in the set's declared order.
///
/// Serializes as a flat JSON object. Every classification of the set has a
/// key, including those that scored 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    entries: Vec<(String, f64)>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a score. A name seen before keeps its position and takes the
    /// new score.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((name, score)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClassificationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultVisitor;

        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = ClassificationResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of classification names to scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut result = ClassificationResult::new();
                while let Some((name, score)) = access.next_entry::<String, f64>()? {
                    result.insert(name, score);
                }
                Ok(result)
            }
        }

        deserializer.deserialize_map(ResultVisitor)
    }
}

/// A term that found at least one window in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermMatch {
    pub term: String,
    pub weight: f64,
    /// Token offset of the first matching window.
    pub offset: usize,
}

/// Score of one classification plus the terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationScore {
    pub name: String,
    pub score: f64,
    pub matched_terms: Vec<TermMatch>,
}

/// Explanation for a classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub set_id: i64,
    pub set_name: String,
    pub definition_version: DefinitionVersion,
    pub document_tokens: usize,
    pub classifications: Vec<ClassificationScore>,
}

impl From<&ClassificationReport> for ClassificationResult {
    fn from(report: &ClassificationReport) -> Self {
        let mut result = ClassificationResult::new();
        for c in &report.classifications {
            result.insert(c.name.clone(), c.score);
        }
        result
    }
}
