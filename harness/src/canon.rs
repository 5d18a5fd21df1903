//! Canonical JSON bytes for digest binding.
//!
//! Every report digest goes through [`canonical_json_bytes`], so two runs that
//! produce the same logical report produce the same bytes.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order.
//! 2. Compact form, no whitespace.
//! 3. Strings escaped per RFC 8259 §7; non-ASCII passes through as UTF-8.
//! 4. Numbers must fit `i64` or `u64`. Floats are rejected.

use serde::Serialize;
use serde_json::Value;

/// Canonical JSON serialization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// The value could not be converted to JSON at all.
    #[error("value is not representable as JSON: {detail}")]
    NotJson { detail: String },
}

/// Canonical bytes of a JSON value.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] for any float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Canonical bytes of any serializable value.
///
/// # Errors
///
/// Returns [`CanonError::NotJson`] if serialization fails and
/// [`CanonError::NonIntegerNumber`] for any float.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonError> {
    let value = serde_json::to_value(value).map_err(|e| CanonError::NotJson {
        detail: e.to_string(),
    })?;
    canonical_json_bytes(&value)
}

/// Append `value` to `out`, ordering object members by key bytes.
///
/// Scalars and keys are written by `serde_json`, whose compact escaping
/// already matches the rules above.
fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        Value::Array(items) => {
            out.push(b'[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(out, item)?;
            }
            out.push(b']');
            Ok(())
        }
        Value::Object(members) => {
            let mut keys: Vec<&String> = members.keys().collect();
            keys.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
            out.push(b'{');
            for (index, key) in keys.into_iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_scalar(out, key)?;
                out.push(b':');
                write_value(out, &members[key.as_str()])?;
            }
            out.push(b'}');
            Ok(())
        }
        scalar => write_scalar(out, scalar),
    }
}

fn write_scalar<T: Serialize + ?Sized>(out: &mut Vec<u8>, scalar: &T) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *out, scalar).map_err(|e| CanonError::NotJson {
        detail: e.to_string(),
    })
}
