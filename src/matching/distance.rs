pub trait EditDistance {
    fn distance(&self, a: &str, b: &str) -> usize;

    fn within(&self, a: &str, b: &str, max: usize) -> bool {
        self.distance(a, b) <= max
    }

    /// Like `within`, for a pattern side already run through [`fold_case`].
    fn within_folded(&self, pattern: &[char], candidate: &str, max: usize) -> bool {
        let pattern: String = pattern.iter().collect();
        self.within(&pattern, candidate, max)
    }
}

/// Lowercase a string into chars. Not locale-aware.
pub fn fold_case(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Unit-cost, case-insensitive Levenshtein distance over Unicode scalar values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Levenshtein;

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(&fold_case(a), &fold_case(b), usize::MAX).unwrap_or(usize::MAX)
    }

    fn within(&self, a: &str, b: &str, max: usize) -> bool {
        self.within_folded(&fold_case(a), b, max)
    }

    fn within_folded(&self, pattern: &[char], candidate: &str, max: usize) -> bool {
        let candidate = fold_case(candidate);
        if max == 0 {
            return pattern == candidate.as_slice();
        }
        if pattern.len().abs_diff(candidate.len()) > max {
            return false;
        }
        levenshtein(pattern, &candidate, max).is_some()
    }
}

/// Two-row DP. Returns `None` as soon as every cell of a row exceeds `bound`.
fn levenshtein(a: &[char], b: &[char], bound: usize) -> Option<usize> {
    if a.is_empty() {
        return (b.len() <= bound).then_some(b.len());
    }
    if b.is_empty() {
        return (a.len() <= bound).then_some(a.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > bound {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let d = prev[b.len()];
    (d <= bound).then_some(d)
}
