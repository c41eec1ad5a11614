use serde_json::json;

use clinify_assessments::error::AssessmentError;
use clinify_assessments::{all_assessments, get_assessment};

#[test]
fn registry_lists_every_assessment() {
    let ids: Vec<String> = all_assessments().iter().map(|a| a.id().to_string()).collect();
    assert_eq!(ids, vec!["barthel", "slums", "fall_risk"]);
}

#[test]
fn lookup_by_id() {
    let barthel = get_assessment("barthel").unwrap();
    assert_eq!(barthel.name(), "Barthel Index");
    assert_eq!(barthel.max_score(), 100);
    assert!(get_assessment("tinetti").is_none());
}

#[test]
fn responses_must_be_an_object() {
    for assessment in all_assessments() {
        let err = assessment.score(&json!(["10"])).unwrap_err();
        assert!(matches!(err, AssessmentError::NotAnObject { .. }), "{}", assessment.id());
    }
}

#[test]
fn item_ids_are_unique() {
    for assessment in all_assessments() {
        let mut ids: Vec<&str> = assessment.items().iter().map(|i| i.id.as_str()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count, "{}", assessment.id());
    }
}
