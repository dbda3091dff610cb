use super::distance::EditDistance;
use super::pattern::{CompiledPattern, Matcher};
use crate::text::Token;

impl Matcher {
    pub fn accepts<D: EditDistance>(&self, token: &Token, metric: &D) -> bool {
        match self {
            Matcher::Literal { word, max_distance } => {
                metric.within_folded(word.folded(), &token.text, *max_distance)
            }
            Matcher::AnyToken => true,
            Matcher::NonNumericToken => !token.is_numeric,
            Matcher::NumericToken => token.is_numeric,
        }
    }
}

/// Offset of the first window of `tokens` accepted position-by-position by
/// `pattern`, or `None` when there is no such window (including when the
/// pattern is longer than the document).
pub fn find_window<D: EditDistance>(
    pattern: &CompiledPattern,
    tokens: &[Token],
    metric: &D,
) -> Option<usize> {
    let k = pattern.len();
    if k == 0 || k > tokens.len() {
        return None;
    }

    tokens.windows(k).position(|window| {
        pattern
            .matchers
            .iter()
            .zip(window)
            .all(|(matcher, token)| matcher.accepts(token, metric))
    })
}

pub fn is_match<D: EditDistance>(pattern: &CompiledPattern, tokens: &[Token], metric: &D) -> bool {
    find_window(pattern, tokens, metric).is_some()
}
