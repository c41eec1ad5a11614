use serde_json::json;

use clinify_assessments::Assessment;
use clinify_assessments::assessments::fall_risk::FallRisk;

#[test]
fn risk_levels() {
    let cases = [
        (0, "Low Risk"),
        (24, "Low Risk"),
        (25, "Moderate Risk"),
        (49, "Moderate Risk"),
        (50, "High Risk"),
        (74, "High Risk"),
        (75, "Severe Risk"),
        (90, "Severe Risk"),
    ];

    for (total, expected) in cases {
        let interpretation = FallRisk.interpret(total, &json!({})).unwrap();
        assert_eq!(interpretation.level, expected, "total {total}");
    }
}

#[test]
fn each_ticked_factor_adds_five() {
    let score = FallRisk
        .score(&json!({
            "patientFactors": {
                "historyOfFalls": true,
                "ageOver65": true,
                "confusion": true,
                "gaitBalanceProblems": true,
                "medicationsAffecting": true,
                "alcoholUse": false
            },
            "environmentalFactors": { "homeSafetyIssues": true },
            "organizationalGuidelines": { "educateOnFallPrevention": true }
        }))
        .unwrap();

    assert_eq!(score.total, 30);
    assert_eq!(score.max_score, 90);
    assert_eq!(score.interpretation.level, "Moderate Risk");
    assert_eq!(score.unanswered.len(), 18 - 7);
}

#[test]
fn no_factors_is_low_risk() {
    let score = FallRisk.score(&json!({ "additionalInformation": "" })).unwrap();
    assert_eq!(score.total, 0);
    assert_eq!(score.interpretation.level, "Low Risk");
}

#[test]
fn non_boolean_factor_is_rejected() {
    let err = FallRisk
        .score(&json!({ "patientFactors": { "confusion": "yes" } }))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "fall_risk: invalid answer \"yes\" for 'confusion'"
    );
}
