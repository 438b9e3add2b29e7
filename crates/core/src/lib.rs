//! Domain logic for the Career Compass backend.
//!
//! Everything in this crate is pure: no I/O, no database handles. The api
//! and db crates depend on these types and functions; nothing here depends
//! on them.

pub mod analysis;
pub mod error;
pub mod goal;
pub mod onboarding;
pub mod plan;
pub mod types;
pub mod usage;
