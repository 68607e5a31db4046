//! Transaction id format: a kind prefix, a dash, and five characters from `[A-Z0-9]`.

use crate::errors::{Error, Result};
use rand::Rng;

/// Characters a transaction id suffix is drawn from.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the random part of a transaction id.
pub const SUFFIX_LEN: usize = 5;

/// Builds one candidate id, each suffix character drawn uniformly from [`ALPHABET`].
pub fn candidate<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let mut id = String::with_capacity(prefix.len() + 1 + SUFFIX_LEN);
    id.push_str(prefix);
    id.push('-');
    for _ in 0..SUFFIX_LEN {
        id.push(char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]));
    }
    id
}

/// Returns true when `id` is exactly `{prefix}-` followed by five `[A-Z0-9]` characters.
#[must_use]
pub fn is_well_formed(prefix: &str, id: &str) -> bool {
    let Some(suffix) = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };

    suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Checks `id` against the kind's pattern.
pub fn validate(prefix: &'static str, id: &str) -> Result<()> {
    if is_well_formed(prefix, id) {
        Ok(())
    } else {
        Err(Error::InvalidTransactionId {
            transaction_id: id.to_string(),
            prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_candidate_format() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let id = candidate("RP", &mut rng);
            assert!(is_well_formed("RP", &id), "{id}");
        }
    }

    #[test]
    fn test_candidate_is_deterministic_for_a_seed() {
        let first = candidate("OC", &mut StdRng::seed_from_u64(9));
        let second = candidate("OC", &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("RP", "RP-AB12C"));
        assert!(is_well_formed("CT", "CT-00000"));

        assert!(!is_well_formed("RP", "OC-AB12C"));
        assert!(!is_well_formed("RP", "RP-ab12c"));
        assert!(!is_well_formed("RP", "RP-AB12"));
        assert!(!is_well_formed("RP", "RP-AB12CD"));
        assert!(!is_well_formed("RP", "RPAB12C"));
        assert!(!is_well_formed("RP", "RP-AB 2C"));
        assert!(!is_well_formed("RP", "RP-ÀB12C"));
        assert!(!is_well_formed("RP", ""));
    }

    #[test]
    fn test_validate_reports_prefix() {
        let err = validate("BV", "BV-12").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransactionId { prefix: "BV", .. }
        ));
    }
}
