//! Onboarding step vocabulary and step resolution.
//!
//! The wizard has a fixed, ordered list of steps. The resolver derives
//! the single step to present from the set of steps the user has
//! completed; the database-derived result is the source of truth and
//! wins over any client-side step tracking on reload.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Onboarding steps
// ---------------------------------------------------------------------------

/// The five steps in the onboarding wizard, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    Profile,
    TrialAnalysis,
    PlanSelection,
    GoalSetting,
}

/// All wizard steps in presentation order.
pub const STEP_ORDER: [OnboardingStep; 5] = [
    OnboardingStep::Welcome,
    OnboardingStep::Profile,
    OnboardingStep::TrialAnalysis,
    OnboardingStep::PlanSelection,
    OnboardingStep::GoalSetting,
];

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: usize = 5;

/// Sentinel index returned once every step is complete.
pub const COMPLETE_INDEX: usize = TOTAL_STEPS;

impl OnboardingStep {
    /// Parse a step name from the database or a URL path segment.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "welcome" => Ok(Self::Welcome),
            "profile" => Ok(Self::Profile),
            "trial_analysis" => Ok(Self::TrialAnalysis),
            "plan_selection" => Ok(Self::PlanSelection),
            "goal_setting" => Ok(Self::GoalSetting),
            _ => Err(CoreError::Validation(format!(
                "Invalid onboarding step '{s}'. Must be one of: \
                 welcome, profile, trial_analysis, plan_selection, goal_setting"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Profile => "profile",
            Self::TrialAnalysis => "trial_analysis",
            Self::PlanSelection => "plan_selection",
            Self::GoalSetting => "goal_setting",
        }
    }

    /// Human-readable label for the step.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Profile => "Your Profile",
            Self::TrialAnalysis => "Trial Analysis",
            Self::PlanSelection => "Choose a Plan",
            Self::GoalSetting => "Set Your Goals",
        }
    }
}

// ---------------------------------------------------------------------------
// Step resolution
// ---------------------------------------------------------------------------

/// Resolve the 0-based index of the step to present: the first step in
/// order that is not in the completed set, or [`COMPLETE_INDEX`] when
/// every step is complete.
///
/// A user who jumped ahead (e.g. via deep link) and completed a later
/// step is still resolved to their earliest incomplete step, never the
/// furthest one reached. Calling this twice with the same input yields
/// the same index.
pub fn resolve_current_step(completed: &[OnboardingStep]) -> usize {
    STEP_ORDER
        .iter()
        .position(|step| !completed.contains(step))
        .unwrap_or(COMPLETE_INDEX)
}

/// Whether the wizard is finished for the given completed set.
pub fn is_complete(completed: &[OnboardingStep]) -> bool {
    resolve_current_step(completed) == COMPLETE_INDEX
}
