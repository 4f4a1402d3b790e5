use shepherd_core::models::assessment::{AssessmentData, StressLevel};

#[test]
fn kind_tag_selects_the_variant() {
    let json = r#"{
        "kind": "wellness",
        "stress_level": 8,
        "concerns": ["Burnout"],
        "faith_integration": true,
        "denomination": "Non-denominational",
        "insurance_type": "Blue Cross Blue Shield",
        "preferred_format": "Both in-person and virtual",
        "time_commitment": "Weekend retreat or intensive",
        "specific_goals": null
    }"#;

    let data: AssessmentData = serde_json::from_str(json).unwrap();
    assert!(matches!(data, AssessmentData::Wellness(_)));
    assert_eq!(data.stress_scale(), Some(8));
    assert_eq!(data.denomination(), Some("Non-denominational"));

    let json = r#"{
        "kind": "intake",
        "stress_level": "moderate",
        "primary_concerns": ["Anxiety"],
        "duration": "1-3months",
        "support_system": "Elders at my church",
        "previous_therapy": "past",
        "specific_challenges": "",
        "goals": "Rebuild margin",
        "preferences": { "telehealth": true, "faith_based": false, "group_therapy": false }
    }"#;

    let data: AssessmentData = serde_json::from_str(json).unwrap();
    assert!(matches!(data, AssessmentData::Intake(_)));
    // Wire-only wellness fields are simply absent from the intake view.
    assert_eq!(data.stress_scale(), None);
    assert_eq!(data.denomination(), None);
    assert_eq!(data.insurance_type(), None);
    assert!(data.telehealth());
}

#[test]
fn stress_scale_bands() {
    assert_eq!(StressLevel::from_scale(0), StressLevel::Minimal);
    assert_eq!(StressLevel::from_scale(2), StressLevel::Minimal);
    assert_eq!(StressLevel::from_scale(3), StressLevel::Mild);
    assert_eq!(StressLevel::from_scale(5), StressLevel::Moderate);
    assert_eq!(StressLevel::from_scale(7), StressLevel::Severe);
    assert_eq!(StressLevel::from_scale(9), StressLevel::Crisis);
    assert_eq!(StressLevel::from_scale(10), StressLevel::Crisis);
}

#[test]
fn out_of_range_stress_scale_is_rejected() {
    let json = r#"{
        "kind": "wellness",
        "stress_level": 11,
        "concerns": [],
        "faith_integration": false,
        "denomination": null,
        "insurance_type": null,
        "preferred_format": null,
        "time_commitment": null,
        "specific_goals": null
    }"#;

    let data: AssessmentData = serde_json::from_str(json).unwrap();
    assert!(data.validate().is_err());
}
