use crate::types::{ClassificationScore, TermMatch};

use super::compiled::CompiledClassification;

/// Sum the weight of every matched term of one classification.
///
/// `offsets[i]` is the first matching window of term `i`, `None` if the term
/// never matched. Each term contributes its weight at most once.
pub fn aggregate(classification: &CompiledClassification, offsets: &[Option<usize>]) -> ClassificationScore {
    debug_assert_eq!(classification.terms.len(), offsets.len());

    let mut score = 0.0;
    let mut matched_terms = Vec::new();

    for (term, offset) in classification.terms.iter().zip(offsets) {
        if let Some(offset) = *offset {
            score += term.weight;
            matched_terms.push(TermMatch {
                term: term.pattern.source.clone(),
                weight: term.weight,
                offset,
            });
        }
    }

    ClassificationScore {
        name: classification.name.clone(),
        score,
        matched_terms,
    }
}
