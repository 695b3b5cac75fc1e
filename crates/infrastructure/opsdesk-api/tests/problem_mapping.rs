use std::collections::BTreeMap;

use opsdesk_api::{ApiFailure, Classifier, Problem, Severity};

fn http(status: u16, problem: Option<Problem>) -> ApiFailure {
    ApiFailure::Http {
        status,
        problem,
        message: String::new(),
    }
}

#[test]
fn stale_row_version_conflict_maps_to_concurrency_message() {
    // The backend answers an update carrying an outdated rowVersion with a
    // bare 409 and no problem body.
    let out = Classifier::default().classify(&http(409, None));
    assert_eq!(out.message, "conflict: resource changed concurrently");
    assert_eq!(out.severity, Severity::Error);
    assert!(out.error_code.is_none());
}

#[test]
fn validation_problem_overrides_status_table() {
    let mut errors = BTreeMap::new();
    errors.insert(
        "taxId".to_string(),
        vec!["Tax id is already registered".to_string()],
    );
    let problem = Problem {
        title: Some("One or more validation errors occurred.".to_string()),
        detail: None,
        errors,
    };

    let out = Classifier::default().classify(&http(422, Some(problem)));
    assert_eq!(out.message, "Tax id is already registered");
    assert_eq!(
        out.details.as_deref(),
        Some("One or more validation errors occurred.")
    );
}

#[test]
fn timeout_transport_failure_carries_machine_code() {
    let out =
        Classifier::default().classify(&ApiFailure::Message("timeout of 15000ms exceeded".into()));
    assert_eq!(out.error_code.as_deref(), Some("TIMEOUT"));
    assert!(out.timestamp.is_some());
}

#[test]
fn classification_is_deterministic_for_the_same_payload() {
    let mut errors = BTreeMap::new();
    errors.insert("b".to_string(), vec!["second".to_string()]);
    errors.insert("a".to_string(), vec!["first".to_string()]);
    let problem = Problem {
        errors,
        ..Problem::default()
    };

    let classifier = Classifier::default();
    let one = classifier.classify(&http(400, Some(problem.clone())));
    let two = classifier.classify(&http(400, Some(problem)));
    // Key order is stable, so the flattened message is too.
    assert_eq!(one.message, "first, second");
    assert_eq!(one.message, two.message);
}
