pub mod pattern;
pub mod distance;
pub mod window;

pub use pattern::{CompiledPattern, LiteralWord, Matcher, PatternError};
pub use distance::{fold_case, EditDistance, Levenshtein};
pub use window::{find_window, is_match};
