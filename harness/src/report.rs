//! Search reports: the outcome of one harness run, bound by a digest.

use pathwright_search::policy::SearchPolicy;
use pathwright_search::search::{SearchStats, Termination};
use serde_json::json;

use crate::canon::{canonical_json_bytes, CanonError};
use crate::graph::NodeId;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};

/// Report schema identifier embedded in the JSON form.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Outcome of one run over an [`XyGraph`](crate::graph::XyGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub start: NodeId,
    pub target: NodeId,
    pub policy: SearchPolicy,
    pub termination: Termination,
    /// Identity path from start to target; `None` unless solved.
    pub path: Option<Vec<NodeId>>,
    /// Path cost; `None` unless solved.
    pub cost: Option<i64>,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Whether the run ended with an accepted node.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }

    /// JSON form of the report.
    ///
    /// ```text
    /// { schema_version, start, target, termination, path, cost,
    ///   policy: { max_steps, beam_width },
    ///   stats: { steps, expansions, relaxations, beam_rejections,
    ///            stale_discards, frontier_high_water } }
    /// ```
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "start": self.start,
            "target": self.target,
            "termination": self.termination.as_str(),
            "path": self.path,
            "cost": self.cost,
            "policy": {
                "max_steps": self.policy.max_steps,
                "beam_width": self.policy.beam_width,
            },
            "stats": {
                "steps": self.stats.steps,
                "expansions": self.stats.expansions,
                "relaxations": self.stats.relaxations,
                "beam_rejections": self.stats.beam_rejections,
                "stale_discards": self.stats.stale_discards,
                "frontier_high_water": self.stats.frontier_high_water,
            },
        })
    }

    /// Canonical JSON bytes of [`SearchReport::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report contains a non-integer number,
    /// which cannot happen for integer scores.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Domain-separated SHA-256 of the canonical bytes.
    ///
    /// # Errors
    ///
    /// See [`SearchReport::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }
}
