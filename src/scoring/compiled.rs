// Compiled sets are read-only once built:
// no interior mutability
// safe to share across threads for many documents

use crate::matching::CompiledPattern;
use crate::types::DefinitionVersion;

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTerm {
    pub pattern: CompiledPattern,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClassification {
    pub name: String,
    pub terms: Vec<CompiledTerm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClassifierSet {
    pub set_id: i64,
    pub set_name: String,
    pub version: DefinitionVersion,
    pub classifications: Vec<CompiledClassification>,
}

impl CompiledClassifierSet {
    pub fn term_count(&self) -> usize {
        self.classifications.iter().map(|c| c.terms.len()).sum()
    }
}
