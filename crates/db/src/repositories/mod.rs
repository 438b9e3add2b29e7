//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analysis_repo;
pub mod goal_repo;
pub mod notification_repo;
pub mod onboarding_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod task_repo;
pub mod usage_repo;
pub mod user_repo;

pub use analysis_repo::AnalysisRepo;
pub use goal_repo::GoalRepo;
pub use notification_repo::NotificationRepo;
pub use onboarding_repo::OnboardingRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use usage_repo::UsageRepo;
pub use user_repo::UserRepo;
