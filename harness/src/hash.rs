//! Domain-separated content hashing.
//!
//! Digest input is `domain || data`, where each domain prefix is a
//! null-terminated byte string. Results render as `"sha256:<hex>"`.

use sha2::{Digest, Sha256};

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"PATHWRIGHT::SEARCH_REPORT::V1\0";

/// Domain prefix for graph document digests.
pub const DOMAIN_GRAPH: &[u8] = b"PATHWRIGHT::XY_GRAPH::V1\0";

/// A content-addressed hash in `"algorithm:hex_digest"` form.
///
/// The inner string always holds exactly one `:` with non-empty text on both
/// sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`.
    ///
    /// Returns `None` on a missing colon, empty algorithm or empty digest.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// Algorithm prefix, e.g. `sha256`.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// Lowercase hex digest without the prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// Full `algorithm:hex` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{digest}"),
    }
}
