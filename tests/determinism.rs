use std::thread;

use classify_core::definition::{Classification, ClassifierSet, Term};
use classify_core::scoring::CompiledClassifierSet;
use classify_core::types::DefinitionVersion;
use classify_core::Classifier;

fn sample_set() -> ClassifierSet {
    ClassifierSet::new(42, "documents")
        .with_classification(
            Classification::new(1, "Invoice")
                .with_term(Term::new("invoice", 1, 5.0))
                .with_term(Term::new("total #", 0, 2.0)),
        )
        .with_classification(
            Classification::new(2, "Contract")
                .with_term(Term::new("contract ?", 0, 3.0))
                .with_term(Term::new("hereby * agree", 1, 1.5)),
        )
        .with_classification(Classification::new(3, "Unused"))
}

const DOCUMENTS: [&str; 4] = [
    "Invoce no. 77: total 1500 due within 30 days",
    "The parties hereby mutually agree to this contract amendment",
    "",
    "contract 2024 background",
];

#[test]
fn repeated_runs_are_identical() {
    let set = sample_set();
    let classifier = Classifier::default();

    for text in DOCUMENTS {
        let first = classifier.classify(text, &set).unwrap();
        let second = classifier.classify(text, &set).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn compiled_and_direct_runs_agree() {
    let set = sample_set();
    let classifier = Classifier::default();
    let compiled = classifier.compile(&set).unwrap();

    for text in DOCUMENTS {
        assert_eq!(
            classifier.classify(text, &set).unwrap(),
            classifier.classify_compiled(text, &compiled)
        );
    }
}

#[test]
fn definition_version_tracks_content() {
    let set = sample_set();
    let same = sample_set();
    assert_eq!(DefinitionVersion::from_set(&set), DefinitionVersion::from_set(&same));
    assert!(DefinitionVersion::from_set(&set).as_str().starts_with("sha256:"));

    let mut reweighted = sample_set();
    reweighted.classifiers[0].terms[0].weight = 6.0;
    assert_ne!(DefinitionVersion::from_set(&set), DefinitionVersion::from_set(&reweighted));

    let mut renamed = sample_set();
    renamed.classifiers[0].id = 99;
    assert_ne!(DefinitionVersion::from_set(&set), DefinitionVersion::from_set(&renamed));

    let mut loosened = sample_set();
    loosened.classifiers[1].terms[0].distance = 1;
    assert_ne!(DefinitionVersion::from_set(&set), DefinitionVersion::from_set(&loosened));
}

#[test]
fn compiled_set_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledClassifierSet>();

    let classifier = Classifier::default();
    let compiled = classifier.compile(&sample_set()).unwrap();
    let expected: Vec<_> = DOCUMENTS
        .iter()
        .map(|text| classifier.classify_compiled(text, &compiled))
        .collect();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = DOCUMENTS
            .iter()
            .map(|text| {
                let compiled = &compiled;
                scope.spawn(move || Classifier::default().classify_compiled(text, compiled))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}

#[test]
fn definition_version_separates_field_boundaries() {
    let split_a = ClassifierSet::new(1, "ab")
        .with_classification(Classification::new(1, "c").with_term(Term::new("x", 0, 1.0)));
    let split_b = ClassifierSet::new(1, "a")
        .with_classification(Classification::new(1, "bc").with_term(Term::new("x", 0, 1.0)));
    assert_ne!(DefinitionVersion::from_set(&split_a), DefinitionVersion::from_set(&split_b));
}
