//! Run policy: step budget and optional beam width.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Budget and frontier-shaping configuration for one run.
///
/// Deserializes from JSON with every field optional; missing fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Hard cap on steps (frontier examinations).
    pub max_steps: u64,
    /// Keep at most this many frontier entries. `None` runs plain A*.
    pub beam_width: Option<usize>,
}

impl SearchPolicy {
    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero step budget or a
    /// zero beam width, both of which could never reach a goal.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_steps == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_steps must be at least 1".into(),
            });
        }
        if self.beam_width == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "beam_width must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate a policy from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the bytes are not a valid
    /// policy document or the policy fails [`SearchPolicy::validate`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SearchError> {
        let policy: Self =
            serde_json::from_slice(bytes).map_err(|e| SearchError::InvalidPolicy {
                detail: format!("malformed policy JSON: {e}"),
            })?;
        policy.validate()?;
        Ok(policy)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_steps: 100_000,
            beam_width: None,
        }
    }
}
