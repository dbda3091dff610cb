use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::definition::ClassifierSet;

/// Content hash of a classifier set definition.
///
/// Two sets with the same classifications, terms, distances and weights in
/// the same order hash to the same version, so callers can key caches of
/// compiled sets on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionVersion(String);

impl DefinitionVersion {
    pub fn from_set(set: &ClassifierSet) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(set.id.to_le_bytes());
        update_str(&mut hasher, &set.name);
        hasher.update((set.classifiers.len() as u64).to_le_bytes());

        for classification in &set.classifiers {
            hasher.update(classification.id.to_le_bytes());
            update_str(&mut hasher, &classification.name);
            hasher.update((classification.terms.len() as u64).to_le_bytes());

            for term in &classification.terms {
                update_str(&mut hasher, &term.pattern);
                hasher.update(term.distance.to_le_bytes());
                hasher.update(term.weight.to_bits().to_le_bytes());
            }
        }

        let hash = hasher.finalize();
        DefinitionVersion(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart.
fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}
