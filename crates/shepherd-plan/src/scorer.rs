use serde::{Deserialize, Serialize};
use ts_rs::TS;

use shepherd_core::models::assessment::AssessmentData;
use shepherd_core::models::provider::{LocationType, Provider};

/// Ranked match lists are truncated to this many providers.
pub const MAX_MATCHES: usize = 10;

/// Numeric stress scale at which the licensed-therapist bonus applies.
const HIGH_STRESS_SCALE: u8 = 7;

/// One scored provider, with the reasons the score was awarded.
/// Built fresh on every scoring pass; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProviderMatch {
    pub provider: Provider,
    pub match_score: u32,
    pub reasons: Vec<String>,
}

/// Score the provider directory against a stored assessment.
///
/// Returns at most [`MAX_MATCHES`] providers, sorted by descending score.
/// Providers scoring zero are excluded entirely. The sort is stable, so
/// equal scores keep directory order; no finer tie-break is defined.
pub fn score(assessment: &AssessmentData, providers: &[Provider]) -> Vec<ProviderMatch> {
    let mut matches: Vec<ProviderMatch> = providers
        .iter()
        .filter_map(|provider| {
            let (match_score, reasons) = score_provider(assessment, provider);
            (match_score > 0).then(|| ProviderMatch {
                provider: provider.clone(),
                match_score,
                reasons,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(MAX_MATCHES);
    matches
}

/// Additive per-provider scoring. Each rule contributes points and a
/// reason independently, in fixed order. Point values are part of the
/// product contract; do not retune them without versioning the output.
fn score_provider(assessment: &AssessmentData, provider: &Provider) -> (u32, Vec<String>) {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    // Concern / specialty overlap, case-insensitive substring in either
    // direction ("Burnout" matches the "Burnout Recovery" specialty and
    // vice versa).
    let overlapping: Vec<&str> = assessment
        .concerns()
        .iter()
        .filter(|concern| {
            let concern = concern.to_lowercase();
            provider.specialties.iter().any(|specialty| {
                let specialty = specialty.to_lowercase();
                specialty.contains(&concern) || concern.contains(&specialty)
            })
        })
        .map(String::as_str)
        .collect();
    if !overlapping.is_empty() {
        score += 20 * overlapping.len() as u32;
        reasons.push(format!("Specializes in {}", first_two(&overlapping)));
    }

    if assessment.faith_integration() && !provider.denominations.is_empty() {
        score += 15;
        reasons.push("Offers faith-integrated care".to_string());
    }

    if let Some(denomination) = assessment.denomination()
        && provider.denominations.iter().any(|d| d == denomination)
    {
        score += 10;
        reasons.push(format!("Familiar with {denomination} traditions"));
    }

    if let Some(insurance) = assessment.insurance_type()
        && provider.insurance_accepted.iter().any(|i| i == insurance)
    {
        score += 15;
        reasons.push(format!("Accepts {insurance}"));
    }

    if let Some(format) = assessment.preferred_format() {
        let format = format.to_lowercase();
        if format.contains("virtual")
            && matches!(
                provider.location_type,
                LocationType::Virtual | LocationType::Both
            )
        {
            score += 10;
            reasons.push("Offers virtual/telehealth sessions".to_string());
        }
        if format.contains("in-person")
            && matches!(
                provider.location_type,
                LocationType::InPerson | LocationType::Both
            )
        {
            score += 10;
            reasons.push("Offers in-person sessions".to_string());
        }
    }

    if let Some(commitment) = assessment.time_commitment() {
        let commitment = commitment.to_lowercase();
        if commitment.contains("retreat") && provider.retreat_facilitated {
            score += 15;
            reasons.push("Facilitates retreats for ministry leaders".to_string());
        }
        if commitment.contains("weekend")
            && provider
                .service_durations
                .iter()
                .any(|d| d.to_lowercase().contains("weekend"))
        {
            score += 10;
            reasons.push("Offers weekend intensive programs".to_string());
        }
    }

    // Only the wellness check records a numeric scale; a categorical
    // intake level never triggers this bonus.
    if assessment
        .stress_scale()
        .is_some_and(|s| s >= HIGH_STRESS_SCALE)
        && provider.actual_therapists
    {
        score += 15;
        reasons.push("Licensed therapists on staff for high-stress situations".to_string());
    }

    if provider.rating >= 4.5 {
        score += 10;
        reasons.push(format!("Highly rated ({:.1}/5.0)", provider.rating));
    }

    if provider.content_resources && !provider.content_resources_list.is_empty() {
        score += 5;
        reasons.push(format!(
            "Provides {}",
            first_two(&provider.content_resources_list)
        ));
    }

    if !provider.general_relational_support.is_empty() {
        score += 5;
        reasons.push(format!(
            "Offers {}",
            first_two(&provider.general_relational_support)
        ));
    }

    if provider.benevolence_request {
        score += 5;
        reasons.push("Financial assistance available".to_string());
    }

    (score, reasons)
}

/// Join the first two entries with " and " for reason strings.
fn first_two<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .take(2)
        .map(S::as_ref)
        .collect::<Vec<_>>()
        .join(" and ")
}
