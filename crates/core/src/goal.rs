//! Goal and task domain vocabulary.
//!
//! Goals carry a status, priority, category, and an explicit origin so
//! downstream features never have to infer where a goal came from by
//! inspecting its title text.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Paused,
    Completed,
    Archived,
}

impl GoalStatus {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(CoreError::Validation(format!(
                "Invalid goal status '{s}'. Must be one of: active, paused, completed, archived"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

/// Priority of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

impl GoalPriority {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CoreError::Validation(format!(
                "Invalid goal priority '{s}'. Must be one of: low, medium, high"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Where a goal came from. Set at creation time, never inferred later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalOrigin {
    /// Created by the user through the goals page.
    User,
    /// Created during the onboarding wizard's goal-setting step.
    Onboarding,
    /// Suggested from an analysis result and accepted by the user.
    Suggested,
}

impl GoalOrigin {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "user" => Ok(Self::User),
            "onboarding" => Ok(Self::Onboarding),
            "suggested" => Ok(Self::Suggested),
            _ => Err(CoreError::Validation(format!(
                "Invalid goal origin '{s}'. Must be one of: user, onboarding, suggested"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Onboarding => "onboarding",
            Self::Suggested => "suggested",
        }
    }
}

/// Progress of a goal derived from its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub completed_tasks: i64,
    pub total_tasks: i64,
    /// Completed fraction in `[0, 1]`; `0` for a goal with no tasks.
    pub fraction: f64,
}

/// Compute progress from task counts.
pub fn goal_progress(completed_tasks: i64, total_tasks: i64) -> GoalProgress {
    let fraction = if total_tasks > 0 {
        completed_tasks as f64 / total_tasks as f64
    } else {
        0.0
    };
    GoalProgress {
        completed_tasks,
        total_tasks,
        fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_arithmetic() {
        let progress = goal_progress(3, 4);
        assert_eq!(progress.completed_tasks, 3);
        assert_eq!(progress.total_tasks, 4);
        assert!((progress.fraction - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_with_no_tasks_is_zero() {
        let progress = goal_progress(0, 0);
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn test_enum_round_trips() {
        for s in ["active", "paused", "completed", "archived"] {
            assert_eq!(GoalStatus::from_str_db(s).unwrap().as_str(), s);
        }
        for s in ["low", "medium", "high"] {
            assert_eq!(GoalPriority::from_str_db(s).unwrap().as_str(), s);
        }
        for s in ["user", "onboarding", "suggested"] {
            assert_eq!(GoalOrigin::from_str_db(s).unwrap().as_str(), s);
        }
        assert!(GoalStatus::from_str_db("done").is_err());
    }
}
