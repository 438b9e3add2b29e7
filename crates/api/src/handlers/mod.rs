//! HTTP handlers, one module per resource.

pub mod analyses;
pub mod auth;
pub mod billing;
pub mod goals;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod tasks;
pub mod usage;
