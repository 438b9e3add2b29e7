//! Usage-ledger computation.
//!
//! Derives, for each analysis type, whether a user may invoke it, given
//! their subscription tier and their (possibly absent) usage counters.
//! This is pure; reading the counters row and rejecting unauthenticated
//! callers happen in the api crate before this runs.

use serde::Serialize;

use crate::plan::{AnalysisType, SubscriptionTier, ALL_ANALYSIS_TYPES, UNLIMITED};

/// Usage status for one analysis type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageStatus {
    pub analysis_type: AnalysisType,
    pub used: i32,
    pub limit: i32,
    pub can_use: bool,
}

/// Raw per-type counters as stored in the `usage_limits` row.
///
/// A missing row is represented by `None` at the call site; individual
/// lookups then fall back to `used = 0` and the tier default limit.
pub trait UsageCounters {
    /// The `used` counter for an analysis type.
    fn used(&self, analysis_type: AnalysisType) -> i32;
    /// The stored `limit` for an analysis type.
    fn limit(&self, analysis_type: AnalysisType) -> i32;
}

/// Compute the usage status for one analysis type.
///
/// `can_use` is true iff the limit is the unlimited sentinel or the used
/// count is strictly below the limit.
pub fn status_for(
    counters: Option<&impl UsageCounters>,
    tier: SubscriptionTier,
    analysis_type: AnalysisType,
) -> UsageStatus {
    let (used, limit) = match counters {
        Some(c) => (c.used(analysis_type), c.limit(analysis_type)),
        None => (0, tier.default_limit(analysis_type)),
    };
    UsageStatus {
        analysis_type,
        used,
        limit,
        can_use: limit == UNLIMITED || used < limit,
    }
}

/// Compute the usage status for every analysis type, in the fixed
/// reporting order.
pub fn usage_report(
    counters: Option<&impl UsageCounters>,
    tier: SubscriptionTier,
) -> Vec<UsageStatus> {
    ALL_ANALYSIS_TYPES
        .iter()
        .map(|&analysis_type| status_for(counters, tier, analysis_type))
        .collect()
}
