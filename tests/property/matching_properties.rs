use classify_core::definition::{Classification, ClassifierSet, Term};
use classify_core::matching::{is_match, CompiledPattern, EditDistance, Levenshtein};
use classify_core::text::{Tokenizer, WordTokenizer};
use classify_core::{classify, Classifier};
use proptest::prelude::*;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,6}", 0..12)
}

proptest! {
    #[test]
    fn runs_are_deterministic(text in ".{0,200}", pattern in "[a-z?#* ]{1,20}") {
        let set = ClassifierSet::new(1, "s")
            .with_classification(Classification::new(1, "c").with_term(Term::new(pattern, 1, 1.0)));
        let classifier = Classifier::default();
        // patterns like "?#" compile to nothing; the error must be stable too
        prop_assert_eq!(classifier.classify(&text, &set), classifier.classify(&text, &set));
    }

    #[test]
    fn distance_is_monotonic(doc in words(), word in "[a-z]{1,8}", d in 0u32..4) {
        let tokens = WordTokenizer.tokenize(&doc.join(" "));
        let tight = CompiledPattern::compile(&WordTokenizer, &Term::new(word.clone(), d, 1.0)).unwrap();
        let loose = CompiledPattern::compile(&WordTokenizer, &Term::new(word, d + 1, 1.0)).unwrap();
        if is_match(&tight, &tokens, &Levenshtein) {
            prop_assert!(is_match(&loose, &tokens, &Levenshtein));
        }
    }

    #[test]
    fn wildcards_consume_one_token_each(doc in words(), k in 1usize..8) {
        let tokens = WordTokenizer.tokenize(&doc.join(" "));
        let raw = vec!["*"; k].join(" ");
        let pattern = CompiledPattern::compile(&WordTokenizer, &Term::new(raw, 0, 1.0)).unwrap();
        prop_assert_eq!(is_match(&pattern, &tokens, &Levenshtein), tokens.len() >= k);
    }

    #[test]
    fn empty_classification_scores_zero(text in ".{0,200}") {
        let set = ClassifierSet::new(1, "s").with_classification(Classification::new(1, "empty"));
        let result = classify(&text, &set).unwrap();
        prop_assert_eq!(result.get("empty"), Some(0.0));
    }

    #[test]
    fn within_agrees_with_distance(a in "[a-zé]{0,10}", b in "[a-zé]{0,10}", max in 0usize..6) {
        let lev = Levenshtein;
        prop_assert_eq!(lev.within(&a, &b, max), lev.distance(&a, &b) <= max);
        prop_assert_eq!(lev.distance(&a, &b), lev.distance(&b, &a));
    }
}
