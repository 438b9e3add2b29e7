//! Subscription plans and analysis types.
//!
//! Defines the tier and analysis-type vocabularies plus the per-tier
//! usage limits. Limits are a pure function of (tier, analysis type);
//! the `-1` sentinel means unlimited.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Limit sentinel meaning "unlimited".
pub const UNLIMITED: i32 = -1;

// ---------------------------------------------------------------------------
// Subscription tiers
// ---------------------------------------------------------------------------

/// The three subscription tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Standard,
    Premium,
}

impl SubscriptionTier {
    /// Parse a tier string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "free" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(CoreError::Validation(format!(
                "Invalid subscription tier '{s}'. Must be one of: free, standard, premium"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    /// Whether this tier may persist analysis results. Free-tier results
    /// are held in memory for the current view only.
    pub fn allows_saving(&self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Default usage limit for an analysis type on this tier, used when
    /// no counters row exists yet. Paid tiers are unlimited; the free
    /// tier gets one use of each type except persona, which is paid-only.
    pub fn default_limit(&self, analysis_type: AnalysisType) -> i32 {
        match self {
            Self::Free => match analysis_type {
                AnalysisType::Persona => 0,
                _ => 1,
            },
            Self::Standard | Self::Premium => UNLIMITED,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis types
// ---------------------------------------------------------------------------

/// The five AI analysis types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Clarity,
    Strengths,
    CareerPath,
    Values,
    Persona,
}

/// All analysis types in a fixed order, used when reporting usage status.
pub const ALL_ANALYSIS_TYPES: [AnalysisType; 5] = [
    AnalysisType::Clarity,
    AnalysisType::Strengths,
    AnalysisType::CareerPath,
    AnalysisType::Values,
    AnalysisType::Persona,
];

impl AnalysisType {
    /// Parse an analysis type string from the database or a request body.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "clarity" => Ok(Self::Clarity),
            "strengths" => Ok(Self::Strengths),
            "career_path" => Ok(Self::CareerPath),
            "values" => Ok(Self::Values),
            "persona" => Ok(Self::Persona),
            _ => Err(CoreError::Validation(format!(
                "Invalid analysis type '{s}'. Must be one of: \
                 clarity, strengths, career_path, values, persona"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Strengths => "strengths",
            Self::CareerPath => "career_path",
            Self::Values => "values",
            Self::Persona => "persona",
        }
    }

    /// Human-readable label for the analysis type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clarity => "Career Clarity",
            Self::Strengths => "Strengths Discovery",
            Self::CareerPath => "Career Path",
            Self::Values => "Work Values",
            Self::Persona => "Career Persona",
        }
    }
}
