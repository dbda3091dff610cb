//! Deterministic document classification engine.
//!
//! `classify-core` scores plain document text against user-defined
//! categories. Each category owns weighted term patterns made of literal
//! words, matched with a Levenshtein tolerance, and single-token wildcards
//! (`*` any, `?` no digit, `#` has a digit). A category's score is the sum of
//! the weights of its terms found anywhere in the document. Runs are pure:
//! identical inputs always produce identical outputs.

pub mod definition;
pub mod matching;
pub mod scoring;
pub mod text;
pub mod types;

pub use scoring::{classify, Classifier};
