use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Self-reported stress severity from the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StressLevel {
    Minimal,
    Mild,
    Moderate,
    Severe,
    Crisis,
}

impl StressLevel {
    /// Map a 0–10 wellness-check stress scale onto the categorical bands:
    /// 0–2 minimal, 3–4 mild, 5–6 moderate, 7–8 severe, 9–10 crisis.
    pub fn from_scale(scale: u8) -> Self {
        match scale {
            0..=2 => StressLevel::Minimal,
            3..=4 => StressLevel::Mild,
            5..=6 => StressLevel::Moderate,
            7..=8 => StressLevel::Severe,
            _ => StressLevel::Crisis,
        }
    }
}

/// How long the reported concerns have been present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomDuration {
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "1-3months")]
    OneToThreeMonths,
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12months")]
    SixToTwelveMonths,
    #[serde(rename = "over1year")]
    OverOneYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PreviousTherapy {
    None,
    Past,
    Current,
}

/// Care preferences collected on the final intake step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePreferences {
    pub telehealth: bool,
    pub faith_based: bool,
    pub group_therapy: bool,
}

/// The three-step intake questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeAssessment {
    pub stress_level: StressLevel,
    pub primary_concerns: Vec<String>,
    pub duration: SymptomDuration,
    pub support_system: String,
    pub previous_therapy: PreviousTherapy,
    pub specific_challenges: String,
    pub goals: String,
    pub preferences: CarePreferences,
}

/// The wellness-check questionnaire: numeric stress scale plus insurance
/// and format preferences.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessAssessment {
    /// 0–10 self-reported stress scale.
    pub stress_level: u8,
    pub concerns: Vec<String>,
    pub faith_integration: bool,
    pub denomination: Option<String>,
    pub insurance_type: Option<String>,
    pub preferred_format: Option<String>,
    pub time_commitment: Option<String>,
    pub specific_goals: Option<String>,
}

/// Assessment answers stored on a care plan.
///
/// Two intake paths exist and produce differently shaped records; the
/// `kind` discriminant keeps them distinct on the wire. Fields one variant
/// lacks are simply absent from the engine's view of it, and a matching
/// rule that needs such a field does not fire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentData {
    Intake(IntakeAssessment),
    Wellness(WellnessAssessment),
}

impl AssessmentData {
    /// Selected concern tags, whichever intake path produced them.
    pub fn concerns(&self) -> &[String] {
        match self {
            AssessmentData::Intake(a) => &a.primary_concerns,
            AssessmentData::Wellness(a) => &a.concerns,
        }
    }

    /// Whether the respondent asked for faith-integrated care. The intake
    /// form captures this as the `faith_based` preference; the wellness
    /// check asks for it directly.
    pub fn faith_integration(&self) -> bool {
        match self {
            AssessmentData::Intake(a) => a.preferences.faith_based,
            AssessmentData::Wellness(a) => a.faith_integration,
        }
    }

    /// Whether the respondent asked for telehealth. Intake path only.
    pub fn telehealth(&self) -> bool {
        match self {
            AssessmentData::Intake(a) => a.preferences.telehealth,
            AssessmentData::Wellness(_) => false,
        }
    }

    pub fn denomination(&self) -> Option<&str> {
        match self {
            AssessmentData::Intake(_) => None,
            AssessmentData::Wellness(a) => a.denomination.as_deref(),
        }
    }

    pub fn insurance_type(&self) -> Option<&str> {
        match self {
            AssessmentData::Intake(_) => None,
            AssessmentData::Wellness(a) => a.insurance_type.as_deref(),
        }
    }

    pub fn preferred_format(&self) -> Option<&str> {
        match self {
            AssessmentData::Intake(_) => None,
            AssessmentData::Wellness(a) => a.preferred_format.as_deref(),
        }
    }

    pub fn time_commitment(&self) -> Option<&str> {
        match self {
            AssessmentData::Intake(_) => None,
            AssessmentData::Wellness(a) => a.time_commitment.as_deref(),
        }
    }

    /// Numeric 0–10 stress scale. Only the wellness check records one;
    /// the categorical intake level never satisfies scale-based rules.
    pub fn stress_scale(&self) -> Option<u8> {
        match self {
            AssessmentData::Intake(_) => None,
            AssessmentData::Wellness(a) => Some(a.stress_level),
        }
    }

    /// Categorical stress band for both variants.
    pub fn stress_band(&self) -> StressLevel {
        match self {
            AssessmentData::Intake(a) => a.stress_level,
            AssessmentData::Wellness(a) => StressLevel::from_scale(a.stress_level),
        }
    }

    /// Validate an incoming assessment before it is persisted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let AssessmentData::Wellness(a) = self
            && a.stress_level > 10
        {
            return Err(CoreError::OutOfRange {
                field: "stress_level",
                value: a.stress_level.to_string(),
            });
        }
        Ok(())
    }
}
