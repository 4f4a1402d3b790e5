use jiff::Timestamp;
use uuid::Uuid;

use shepherd_core::models::assessment::{
    AssessmentData, CarePreferences, IntakeAssessment, PreviousTherapy, StressLevel,
    SymptomDuration, WellnessAssessment,
};
use shepherd_core::models::provider::{LocationType, Provider};
use shepherd_plan::scorer::{MAX_MATCHES, score};

fn provider(name: &str) -> Provider {
    Provider {
        id: Uuid::new_v4(),
        user_id: None,
        name: name.to_string(),
        credentials: None,
        specialties: Vec::new(),
        bio: None,
        phone: None,
        email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
        website: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        insurance_accepted: Vec::new(),
        accepting_new_clients: true,
        languages: Vec::new(),
        rating: 3.0,
        review_count: 0,
        location_type: LocationType::InPerson,
        location_details: None,
        gloo_scholarship_available: false,
        service_durations: Vec::new(),
        content_resources: false,
        content_resources_list: Vec::new(),
        denominations: Vec::new(),
        retreat_facilitated: false,
        actual_therapists: false,
        general_relational_support: Vec::new(),
        benevolence_request: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn wellness() -> WellnessAssessment {
    WellnessAssessment {
        stress_level: 0,
        concerns: Vec::new(),
        faith_integration: false,
        denomination: None,
        insurance_type: None,
        preferred_format: None,
        time_commitment: None,
        specific_goals: None,
    }
}

fn intake(stress: StressLevel) -> IntakeAssessment {
    IntakeAssessment {
        stress_level: stress,
        primary_concerns: Vec::new(),
        duration: SymptomDuration::Recent,
        support_system: String::new(),
        previous_therapy: PreviousTherapy::None,
        specific_challenges: String::new(),
        goals: String::new(),
        preferences: CarePreferences::default(),
    }
}

#[test]
fn anxiety_baptist_aetna_example_scores_seventy() {
    let mut check = wellness();
    check.concerns.push("Anxiety".to_string());
    check.faith_integration = true;
    check.denomination = Some("Baptist".to_string());
    check.insurance_type = Some("Aetna".to_string());
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Grace Counseling");
    p.specialties.push("Anxiety".to_string());
    p.denominations.push("Baptist".to_string());
    p.insurance_accepted.push("Aetna".to_string());
    p.rating = 4.8;

    let matches = score(&assessment, &[p]);
    assert_eq!(matches.len(), 1);
    // 20 concern + 15 faith + 10 denomination + 15 insurance + 10 rating
    assert_eq!(matches[0].match_score, 70);
    assert_eq!(matches[0].reasons.len(), 5);
    assert_eq!(matches[0].reasons[0], "Specializes in Anxiety");
    assert_eq!(matches[0].reasons[4], "Highly rated (4.8/5.0)");
}

#[test]
fn provider_with_nothing_in_common_is_excluded() {
    let assessment = AssessmentData::Wellness(wellness());
    let p = provider("Plain Practice");

    assert!(score(&assessment, &[p]).is_empty());
}

#[test]
fn output_is_capped_and_sorted_descending() {
    let assessment = AssessmentData::Wellness(wellness());

    let mut providers = Vec::new();
    for i in 0..6 {
        let mut p = provider(&format!("Low {i}"));
        p.benevolence_request = true; // 5 points
        providers.push(p);
    }
    for i in 0..6 {
        let mut p = provider(&format!("High {i}"));
        p.benevolence_request = true;
        p.rating = 4.8; // 15 points total
        providers.push(p);
    }

    let matches = score(&assessment, &providers);
    assert_eq!(matches.len(), MAX_MATCHES);
    for pair in matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    assert!(matches[..6].iter().all(|m| m.match_score == 15));
}

#[test]
fn equal_scores_keep_directory_order() {
    let assessment = AssessmentData::Wellness(wellness());

    let names = ["First", "Second", "Third"];
    let providers: Vec<Provider> = names
        .iter()
        .map(|n| {
            let mut p = provider(n);
            p.benevolence_request = true;
            p
        })
        .collect();

    let matches = score(&assessment, &providers);
    let got: Vec<&str> = matches.iter().map(|m| m.provider.name.as_str()).collect();
    assert_eq!(got, names);
}

#[test]
fn concern_matching_is_substring_and_case_insensitive() {
    let mut check = wellness();
    check.concerns.push("burnout".to_string());
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Renewal Center");
    p.specialties.push("Burnout Recovery".to_string());

    let matches = score(&assessment, &[p]);
    assert_eq!(matches[0].match_score, 20);
    assert_eq!(matches[0].reasons[0], "Specializes in burnout");

    // And in the other direction: the concern contains the specialty.
    let mut check = wellness();
    check.concerns.push("Trauma & PTSD Support".to_string());
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Trauma Care");
    p.specialties.push("trauma & ptsd".to_string());

    let matches = score(&assessment, &[p]);
    assert_eq!(matches[0].match_score, 20);
}

#[test]
fn each_overlapping_concern_adds_twenty_points() {
    let mut check = wellness();
    check.concerns = vec!["Anxiety".to_string(), "Depression".to_string()];
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Full Spectrum");
    p.specialties = vec!["Anxiety".to_string(), "Depression".to_string()];

    let matches = score(&assessment, &[p]);
    assert_eq!(matches[0].match_score, 40);
    assert_eq!(matches[0].reasons[0], "Specializes in Anxiety and Depression");
}

#[test]
fn therapist_bonus_needs_the_numeric_stress_scale() {
    let mut p = provider("Licensed Staff");
    p.actual_therapists = true;

    // A categorical intake level, however severe, never fires the rule.
    let intake_assessment = AssessmentData::Intake(intake(StressLevel::Crisis));
    assert!(score(&intake_assessment, std::slice::from_ref(&p)).is_empty());

    let mut check = wellness();
    check.stress_level = 8;
    let matches = score(&AssessmentData::Wellness(check), &[p]);
    assert_eq!(matches[0].match_score, 15);
    assert_eq!(
        matches[0].reasons[0],
        "Licensed therapists on staff for high-stress situations"
    );
}

#[test]
fn format_and_commitment_preferences_stack() {
    let mut check = wellness();
    check.preferred_format = Some("Both in-person and virtual".to_string());
    check.time_commitment = Some("Weekend retreat or intensive".to_string());
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Retreat House");
    p.location_type = LocationType::Both;
    p.retreat_facilitated = true;
    p.service_durations.push("Weekend".to_string());

    let matches = score(&assessment, &[p]);
    // 10 virtual + 10 in-person + 15 retreat + 10 weekend
    assert_eq!(matches[0].match_score, 45);
    assert_eq!(matches[0].reasons.len(), 4);
}

#[test]
fn intake_faith_preference_counts_for_the_faith_rule() {
    let mut form = intake(StressLevel::Mild);
    form.preferences.faith_based = true;
    let assessment = AssessmentData::Intake(form);

    let mut p = provider("Chapel Counseling");
    p.denominations.push("Methodist".to_string());

    let matches = score(&assessment, &[p]);
    assert_eq!(matches[0].match_score, 15);
    assert_eq!(matches[0].reasons[0], "Offers faith-integrated care");
}

#[test]
fn support_and_resource_bonuses_apply() {
    let assessment = AssessmentData::Wellness(wellness());

    let mut p = provider("Resource Hub");
    p.content_resources = true;
    p.content_resources_list = vec![
        "Books".to_string(),
        "Online Courses".to_string(),
        "Podcast".to_string(),
    ];
    p.general_relational_support =
        vec!["Spiritual Directors".to_string(), "Mentors".to_string()];
    p.benevolence_request = true;

    let matches = score(&assessment, &[p]);
    assert_eq!(matches[0].match_score, 15);
    assert_eq!(
        matches[0].reasons,
        vec![
            "Provides Books and Online Courses",
            "Offers Spiritual Directors and Mentors",
            "Financial assistance available",
        ]
    );
}

#[test]
fn scoring_is_deterministic() {
    let mut check = wellness();
    check.concerns.push("Anxiety".to_string());
    check.faith_integration = true;
    let assessment = AssessmentData::Wellness(check);

    let mut p = provider("Stable Result");
    p.specialties.push("Anxiety".to_string());
    p.denominations.push("Baptist".to_string());

    let first = serde_json::to_value(score(&assessment, std::slice::from_ref(&p))).unwrap();
    let second = serde_json::to_value(score(&assessment, &[p])).unwrap();
    assert_eq!(first, second);
}
