use serde_json::json;

use clinify_assessments::Assessment;
use clinify_assessments::assessments::barthel::Barthel;
use clinify_assessments::error::AssessmentError;

#[test]
fn dependency_bands() {
    let cases = [
        (0, "Total Dependency"),
        (20, "Total Dependency"),
        (21, "Severe Dependency"),
        (35, "Severe Dependency"),
        (36, "Moderate Dependency"),
        (55, "Moderate Dependency"),
        (56, "Slight Dependency"),
        (90, "Slight Dependency"),
        (91, "Independence"),
        (100, "Independence"),
    ];

    for (total, expected) in cases {
        let interpretation = Barthel.interpret(total, &json!({})).unwrap();
        assert_eq!(interpretation.level, expected, "total {total}");
        assert_eq!(interpretation.cutoff, None);
    }
}

#[test]
fn full_marks_are_independent() {
    let score = Barthel
        .score(&json!({
            "feeding": "10", "bathing": "5", "grooming": "5", "dressing": "10",
            "bowels": "10", "bladder": "10", "toiletUse": "10", "transfers": "15",
            "mobility": "15", "stairs": "10"
        }))
        .unwrap();

    assert_eq!(score.total, 100);
    assert_eq!(score.max_score, 100);
    assert_eq!(score.interpretation.level, "Independence");
    assert!(score.unanswered.is_empty());
}

#[test]
fn sums_string_and_numeric_answers() {
    let score = Barthel
        .score(&json!({
            "feeding": "10", "bathing": 5, "grooming": "5", "dressing": 10,
            "bowels": "10", "bladder": "5", "toiletUse": "5", "transfers": "10",
            "mobility": "10", "stairs": ""
        }))
        .unwrap();

    assert_eq!(score.total, 70);
    assert_eq!(score.interpretation.level, "Slight Dependency");
    assert_eq!(score.unanswered, vec!["stairs"]);
    assert_eq!(score.items.len(), 10);
    assert_eq!(score.items[1].item_id, "bathing");
    assert_eq!(score.items[1].points, 5);
}

#[test]
fn empty_form_is_total_dependency() {
    let score = Barthel.score(&json!({})).unwrap();
    assert_eq!(score.total, 0);
    assert_eq!(score.unanswered.len(), 10);
    assert_eq!(score.interpretation.level, "Total Dependency");
}

#[test]
fn rejects_answer_outside_the_options() {
    let err = Barthel.score(&json!({ "feeding": "7" })).unwrap_err();
    match err {
        AssessmentError::InvalidResponse { item_id, value, .. } => {
            assert_eq!(item_id, "feeding");
            assert_eq!(value, "\"7\"");
        }
        other => panic!("unexpected error: {other}"),
    }

    // bathing tops out at 5
    assert!(Barthel.score(&json!({ "bathing": "10" })).is_err());
}
