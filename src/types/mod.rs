pub mod classification;
pub mod identifiers;

pub use classification::{ClassificationReport, ClassificationResult, ClassificationScore, TermMatch};
pub use identifiers::DefinitionVersion;
pub use crate::matching::PatternError;
