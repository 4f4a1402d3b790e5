use shepherd_core::models::assessment::{AssessmentData, StressLevel};
use shepherd_core::models::care_plan::PriorityLevel;
use shepherd_core::models::recommendation::{ItemPriority, RecommendationItem, RecommendationPlan};

/// Concern tags with dedicated recommendation rules.
const BURNOUT: &str = "Burnout";
const COMPASSION_FATIGUE: &str = "Compassion Fatigue";

/// Output of [`generate`]: the recommendation plan plus the derived
/// priority level, ready to be stored on a care plan.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub recommendations: RecommendationPlan,
    pub priority: PriorityLevel,
}

/// Derive the plan priority from self-reported stress. First match wins;
/// anything below moderate is low.
pub fn priority_level(assessment: &AssessmentData) -> PriorityLevel {
    match assessment.stress_band() {
        StressLevel::Crisis => PriorityLevel::Urgent,
        StressLevel::Severe => PriorityLevel::High,
        StressLevel::Moderate => PriorityLevel::Medium,
        StressLevel::Mild | StressLevel::Minimal => PriorityLevel::Low,
    }
}

/// Generate categorized recommendations from a completed assessment.
///
/// Rules are independent and appended in a fixed order, so identical
/// input always yields identical output. An assessment with minimal
/// stress and no concerns still produces the two unconditional items;
/// an empty category is valid output, never an error.
pub fn generate(assessment: &AssessmentData) -> GeneratedPlan {
    let mut plan = RecommendationPlan::default();
    let stress = assessment.stress_band();
    let concerns = assessment.concerns();

    if matches!(stress, StressLevel::Severe | StressLevel::Crisis) {
        plan.immediate.push(
            RecommendationItem::new(
                "Immediate Support",
                "Consider reaching out to a crisis helpline or emergency services if you are \
                 in immediate danger.",
            )
            .with_priority(ItemPriority::Urgent),
        );
    }

    if assessment.faith_integration() {
        plan.short_term.push(RecommendationItem::new(
            "Faith-Based Counseling",
            "Connect with a mental health professional who can integrate your faith \
             perspective into treatment.",
        ));
    }

    if assessment.telehealth() {
        plan.short_term.push(RecommendationItem::new(
            "Telehealth Options",
            "Explore online therapy options for flexible scheduling and convenience.",
        ));
    }

    if concerns.iter().any(|c| c == BURNOUT) {
        plan.short_term.push(RecommendationItem::new(
            "Burnout Prevention",
            "Work with a therapist on establishing healthy boundaries and self-care routines.",
        ));
        plan.resources.push(RecommendationItem::new(
            "Sabbath and Rest Practices",
            "Resources for implementing regular rest and renewal practices.",
        ));
    }

    if concerns.iter().any(|c| c == COMPASSION_FATIGUE) {
        plan.long_term.push(RecommendationItem::new(
            "Compassion Fatigue Management",
            "Develop sustainable caregiving practices and emotional resilience strategies.",
        ));
    }

    plan.long_term.push(RecommendationItem::new(
        "Regular Therapy",
        "Establish a consistent therapeutic relationship for ongoing support.",
    ));
    plan.resources.push(RecommendationItem::new(
        "Support Groups",
        "Connect with other ministry leaders facing similar challenges.",
    ));

    GeneratedPlan {
        recommendations: plan,
        priority: priority_level(assessment),
    }
}
