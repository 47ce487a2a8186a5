//! Client Seed Mixing
//!
//! Folds both players' UIDs and client seeds into one 32-byte combined seed:
//!
//! ```text
//! combined = SHA-256("<left uid>:<right uid>:" || first_seed || ":" || second_seed)
//! ```
//!
//! Two independent ordering rules apply and must stay separate:
//! - the header is ordered by comparing the UIDs as decimal *strings*;
//! - the seeds are ordered by comparing the UIDs as *numbers*.
//!
//! They disagree for pairs like 9 and 10, and issued reports depend on
//! both. Either way the result does not depend on which player is listed
//! first.

use tracing::debug;

use crate::core::hash::{Digest32, SeedHasher};
use crate::proof::report::{decode_hex_field, PlayerEntry};
use crate::proof::verify::VerificationError;

/// Separator between header fields and between the two seeds.
const SEPARATOR: u8 = b':';

/// Order two decimal UID strings for the header.
///
/// The lexicographically smaller string goes left.
pub fn header_order<'a>(a_uid: &'a str, b_uid: &'a str) -> (&'a str, &'a str) {
    if a_uid < b_uid {
        (a_uid, b_uid)
    } else {
        (b_uid, a_uid)
    }
}

/// Should the seeds of `a` and `b` swap places?
///
/// Numeric comparison: the seed of the numerically smaller UID goes first.
pub fn seeds_swapped(a_uid: i64, b_uid: i64) -> bool {
    a_uid > b_uid
}

/// Build the `"<left>:<right>:"` header.
pub fn mix_header(a_uid: i64, b_uid: i64) -> String {
    let a = a_uid.to_string();
    let b = b_uid.to_string();
    let (left, right) = header_order(&a, &b);
    format!("{left}:{right}:")
}

/// Derive the combined seed from the two player entries, in report order.
pub fn combined_seed(a: &PlayerEntry, b: &PlayerEntry) -> Result<Digest32, VerificationError> {
    let a_seed = decode_hex_field(&a.client_seed, "players[0].client_seed")?;
    let b_seed = decode_hex_field(&b.client_seed, "players[1].client_seed")?;

    let header = mix_header(a.uid, b.uid);
    let (first, second) = if seeds_swapped(a.uid, b.uid) {
        (&b_seed, &a_seed)
    } else {
        (&a_seed, &b_seed)
    };

    let mut hasher = SeedHasher::new();
    hasher.update_str(&header);
    hasher.update_bytes(first);
    hasher.update_u8(SEPARATOR);
    hasher.update_bytes(second);
    let combined = hasher.finalize();

    debug!(header = %header, combined = %hex::encode(combined), "derived combined seed");
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::hash_bytes;
    use crate::proof::report::SeedSource;
    use proptest::prelude::*;

    const SEED_A: &str = "00112233445566778899aabbccddeeff";
    const SEED_B: &str = "ffeeddccbbaa99887766554433221100";

    fn entry(uid: i64, seed: &str) -> PlayerEntry {
        PlayerEntry::new(uid, seed, SeedSource::Player)
    }

    fn mixed(a: (i64, &str), b: (i64, &str)) -> String {
        hex::encode(combined_seed(&entry(a.0, a.1), &entry(b.0, b.1)).unwrap())
    }

    #[test]
    fn test_golden_combined_seed() {
        assert_eq!(
            mixed((1001, SEED_A), (2002, SEED_B)),
            "dac48c5b1ac4488b75dc882e3eac26ab343f829b67606ae5dbf73dcace848add"
        );
    }

    #[test]
    fn test_matches_manual_concatenation() {
        let mut message = b"1001:2002:".to_vec();
        message.extend(hex::decode(SEED_A).unwrap());
        message.push(b':');
        message.extend(hex::decode(SEED_B).unwrap());

        let combined = combined_seed(&entry(1001, SEED_A), &entry(2002, SEED_B)).unwrap();
        assert_eq!(combined, hash_bytes(&message));
    }

    #[test]
    fn test_header_uses_string_order() {
        assert_eq!(header_order("9", "10"), ("10", "9"));
        assert_eq!(header_order("1001", "2002"), ("1001", "2002"));
        assert_eq!(mix_header(9, 10), "10:9:");
        assert_eq!(mix_header(-5, 3), "-5:3:");
        assert_eq!(mix_header(3, -5), "-5:3:");
    }

    #[test]
    fn test_seed_swap_uses_numeric_order() {
        assert!(!seeds_swapped(9, 10));
        assert!(seeds_swapped(10, 9));
        assert!(!seeds_swapped(-5, 3));
        assert!(!seeds_swapped(7, 7));
    }

    #[test]
    fn test_orders_disagree() {
        // Header "10:9:", but the seed of UID 9 still comes first
        let combined = mixed((9, SEED_A), (10, SEED_B));
        assert_eq!(
            combined,
            "f713a30fc085f2a4c19c6bd782994b7b9b598a10b7498fa657153f33a433eb44"
        );

        // Unifying both rules on string order would give a different seed
        assert_ne!(
            combined,
            "fd384d7d6d1a265b6c40b12e08803ada8a35b7d8cd6ab33e460f7d7749e6922f"
        );
    }

    #[test]
    fn test_negative_uid() {
        assert_eq!(
            mixed((-5, SEED_A), (3, SEED_B)),
            "2cbfc23cc45bf9925d63e863ba5d501950bf0d7246acc54ef2d7500de05602b6"
        );
    }

    #[test]
    fn test_swapped_entries_same_seed() {
        assert_eq!(mixed((1001, SEED_A), (2002, SEED_B)), mixed((2002, SEED_B), (1001, SEED_A)));
        assert_eq!(mixed((9, SEED_A), (10, SEED_B)), mixed((10, SEED_B), (9, SEED_A)));
    }

    #[test]
    fn test_bad_client_seed() {
        let err = combined_seed(&entry(1, SEED_A), &entry(2, "xyz")).unwrap_err();
        assert_eq!(
            err,
            VerificationError::InvalidEncoding {
                field: "players[1].client_seed".to_string()
            }
        );

        let err = combined_seed(&entry(1, "0"), &entry(2, SEED_B)).unwrap_err();
        assert!(matches!(err, VerificationError::InvalidEncoding { .. }));
    }

    proptest! {
        #[test]
        fn prop_mixing_is_order_independent(
            a_uid in any::<i64>(),
            b_uid in any::<i64>(),
            a_seed in any::<[u8; 16]>(),
            b_seed in any::<[u8; 16]>(),
        ) {
            prop_assume!(a_uid != b_uid);
            let a = entry(a_uid, &hex::encode(a_seed));
            let b = entry(b_uid, &hex::encode(b_seed));

            prop_assert_eq!(combined_seed(&a, &b).unwrap(), combined_seed(&b, &a).unwrap());
        }

        #[test]
        fn prop_different_seeds_differ(
            uid in 0i64..1_000_000,
            seed in any::<[u8; 16]>(),
            other in any::<[u8; 16]>(),
        ) {
            prop_assume!(seed != other);
            let b = entry(uid + 1, SEED_B);

            prop_assert_ne!(
                combined_seed(&entry(uid, &hex::encode(seed)), &b).unwrap(),
                combined_seed(&entry(uid, &hex::encode(other)), &b).unwrap()
            );
        }
    }
}
