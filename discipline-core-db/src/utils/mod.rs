use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use std::str::FromStr;
use twox_hash::XxHash64;

use discipline_core_api::{DomainError, DomainResult};

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// Stable across runs and systems: CBOR gives a deterministic binary
/// representation and XxHash64 runs with a fixed seed. Used for the
/// tamper-evidence hash on audit trail rows.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Convert caller-supplied text into a bounded model string.
pub fn bounded<const N: usize>(value: &str, field: &str) -> DomainResult<HeaplessString<N>> {
    HeaplessString::from_str(value)
        .map_err(|_| DomainError::Validation(format!("{field} is too long (max {N} chars)")))
}

/// Convert optional caller-supplied text into a bounded model string.
pub fn bounded_opt<const N: usize>(
    value: Option<&str>,
    field: &str,
) -> DomainResult<Option<HeaplessString<N>>> {
    value.map(|v| bounded::<N>(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_per_payload() {
        let a = hash_as_i64(&"signature recorded").unwrap();
        let b = hash_as_i64(&"signature recorded").unwrap();
        let c = hash_as_i64(&"action voided").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn bounded_rejects_overlong_text() {
        assert!(bounded::<4>("okay", "name").is_ok());
        assert!(matches!(
            bounded::<4>("too long", "name"),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(bounded_opt::<8>(None, "note").unwrap(), None);
    }
}
