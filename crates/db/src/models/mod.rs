//! Row models and DTOs.
//!
//! Each module contains the `FromRow` struct for one table plus any
//! create/update DTOs used by its repository.

pub mod analysis;
pub mod goal;
pub mod notification;
pub mod onboarding;
pub mod profile;
pub mod session;
pub mod task;
pub mod usage;
pub mod user;
