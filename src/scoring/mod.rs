pub mod aggregate;
pub mod compiled;

use tracing::{debug, trace};

use crate::definition::ClassifierSet;
use crate::matching::{find_window, CompiledPattern, EditDistance, Levenshtein, PatternError};
use crate::text::{Tokenizer, WordTokenizer};
use crate::types::{ClassificationReport, ClassificationResult, DefinitionVersion};
pub use aggregate::aggregate;
pub use compiled::{CompiledClassification, CompiledClassifierSet, CompiledTerm};

pub struct Classifier<T, D> {
	tokenizer: T,
	metric: D,
}

impl Default for Classifier<WordTokenizer, Levenshtein> {
	fn default() -> Self {
		Self {
			tokenizer: WordTokenizer,
			metric: Levenshtein,
		}
	}
}

impl<T, D> Classifier<T, D>
where
	T: Tokenizer,
	D: EditDistance,
{
	pub fn new(tokenizer: T, metric: D) -> Self {
		Self { tokenizer, metric }
	}

	/// Compile every term pattern of `set`.
	///
	/// Fails on the first pattern with no tokens; nothing is scored for a set
	/// that does not compile.
	pub fn compile(&self, set: &ClassifierSet) -> Result<CompiledClassifierSet, PatternError> {
		let classifications = set
			.classifiers
			.iter()
			.map(|classification| {
				let terms = classification
					.terms
					.iter()
					.map(|term| {
						let pattern = CompiledPattern::compile(&self.tokenizer, term)
							.map_err(|e| e.in_classification(&classification.name))?;
						Ok::<_, PatternError>(CompiledTerm {
							pattern,
							weight: term.weight,
						})
					})
					.collect::<Result<Vec<_>, PatternError>>()?;

				Ok::<_, PatternError>(CompiledClassification {
					name: classification.name.clone(),
					terms,
				})
			})
			.collect::<Result<Vec<_>, PatternError>>()?;

		let compiled = CompiledClassifierSet {
			set_id: set.id,
			set_name: set.name.clone(),
			version: DefinitionVersion::from_set(set),
			classifications,
		};

		debug!(
			set_id = compiled.set_id,
			classifications = compiled.classifications.len(),
			terms = compiled.term_count(),
			version = compiled.version.as_str(),
			"compiled classifier set"
		);

		Ok(compiled)
	}

	pub fn explain_compiled(&self, text: &str, compiled: &CompiledClassifierSet) -> ClassificationReport {
		// 1. Tokenize once, shared by every term
		let tokens = self.tokenizer.tokenize(text);

		// 2. Match every term, then sum per classification
		let classifications = compiled
			.classifications
			.iter()
			.map(|classification| {
				let offsets: Vec<Option<usize>> = classification
					.terms
					.iter()
					.map(|term| {
						let offset = find_window(&term.pattern, &tokens, &self.metric);
						if let Some(offset) = offset {
							trace!(
								classification = %classification.name,
								term = %term.pattern.source,
								offset,
								"term matched"
							);
						}
						offset
					})
					.collect();
				aggregate(classification, &offsets)
			})
			.collect();

		debug!(
			set_id = compiled.set_id,
			document_tokens = tokens.len(),
			"classified document"
		);

		ClassificationReport {
			set_id: compiled.set_id,
			set_name: compiled.set_name.clone(),
			definition_version: compiled.version.clone(),
			document_tokens: tokens.len(),
			classifications,
		}
	}

	pub fn classify_compiled(&self, text: &str, compiled: &CompiledClassifierSet) -> ClassificationResult {
		ClassificationResult::from(&self.explain_compiled(text, compiled))
	}

	pub fn explain(&self, text: &str, set: &ClassifierSet) -> Result<ClassificationReport, PatternError> {
		let compiled = self.compile(set)?;
		Ok(self.explain_compiled(text, &compiled))
	}

	/// Score `text` against every classification of `set`.
	pub fn classify(&self, text: &str, set: &ClassifierSet) -> Result<ClassificationResult, PatternError> {
		let compiled = self.compile(set)?;
		Ok(self.classify_compiled(text, &compiled))
	}
}

/// Classify with the default tokenizer and Levenshtein distance.
pub fn classify(text: &str, set: &ClassifierSet) -> Result<ClassificationResult, PatternError> {
	Classifier::default().classify(text, set)
}
