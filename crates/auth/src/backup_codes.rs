//! Backup-code verification.
//!
//! Backup codes are stored as SHA-256 hex digests of their normalized form. A
//! candidate is compared against every stored digest with no early exit, so
//! response time does not reveal which (or whether any) stored code matched.

use sha2::{Digest, Sha256};

/// Canonical form of a user-typed code: separators removed, uppercased.
///
/// `"abcd-1234"`, `" ABCD 1234 "` and `"ABCD1234"` all normalize the same.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// SHA-256 hex digest of the normalized code.
pub fn hash_backup_code(code: &str) -> String {
    let digest = Sha256::digest(normalize_code(code).as_bytes());
    format!("{:x}", digest)
}

/// Byte-wise equality that always inspects every byte of equal-length inputs.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Check a candidate code against stored digests.
///
/// Returns the index of the matching digest so the caller can retire that code.
/// Every stored digest is compared regardless of earlier matches.
pub fn verify_backup_code(candidate: &str, stored_hashes: &[String]) -> Option<usize> {
    let candidate_hash = hash_backup_code(candidate);
    let mut matched = None;

    for (index, stored) in stored_hashes.iter().enumerate() {
        let equal = constant_time_eq(candidate_hash.as_bytes(), stored.trim().to_ascii_lowercase().as_bytes());
        if equal && matched.is_none() {
            matched = Some(index);
        }
    }

    if matched.is_none() {
        tracing::debug!(stored = stored_hashes.len(), "backup code rejected");
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stored(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| hash_backup_code(c)).collect()
    }

    #[test]
    fn normalization_ignores_case_and_separators() {
        assert_eq!(normalize_code(" abcd-1234 "), "ABCD1234");
        assert_eq!(hash_backup_code("abcd-1234"), hash_backup_code("ABCD 1234"));
    }

    #[test]
    fn hash_is_lowercase_sha256_hex() {
        let hash = hash_backup_code("ABCD1234");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn verify_returns_index_of_match() {
        let hashes = stored(&["AAAA-1111", "BBBB-2222", "CCCC-3333"]);
        assert_eq!(verify_backup_code("bbbb2222", &hashes), Some(1));
        assert_eq!(verify_backup_code("DDDD-4444", &hashes), None);
        assert_eq!(verify_backup_code("AAAA-1111", &[]), None);
    }

    #[test]
    fn first_index_wins_for_duplicate_hashes() {
        let hashes = stored(&["AAAA-1111", "AAAA-1111"]);
        assert_eq!(verify_backup_code("AAAA-1111", &hashes), Some(0));
    }

    #[test]
    fn uppercase_stored_hash_still_matches() {
        let hashes = vec![hash_backup_code("AAAA-1111").to_uppercase()];
        assert_eq!(verify_backup_code("AAAA-1111", &hashes), Some(0));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: constant_time_eq agrees with ordinary equality.
        #[test]
        fn constant_time_eq_matches_eq(
            a in prop::collection::vec(any::<u8>(), 0..32),
            b in prop::collection::vec(any::<u8>(), 0..32),
        ) {
            prop_assert_eq!(constant_time_eq(&a, &b), a == b);
            prop_assert!(constant_time_eq(&a, &a));
        }
    }
}
