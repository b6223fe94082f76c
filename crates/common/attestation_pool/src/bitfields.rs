use ssz_types::{BitList, typenum::U131072};

/// Signer bitfield of an attestation: bit `i` set means committee member `i`
/// signed. Length equals the committee size.
pub type AggregationBits = BitList<U131072>;

/// True iff `bits` covers every signer in `other`: the lengths are equal and
/// every bit set in `other` is also set in `bits`. Bitfields of different
/// lengths belong to different committees and never match.
pub fn is_superset(bits: &AggregationBits, other: &AggregationBits) -> bool {
    bits.len() == other.len() && other.difference(bits).is_zero()
}

#[cfg(test)]
mod tests {
    use super::{AggregationBits, is_superset};

    fn bits(pattern: &[u8]) -> AggregationBits {
        let mut bitfield =
            AggregationBits::with_capacity(pattern.len()).expect("within committee bounds");
        for (index, bit) in pattern.iter().enumerate() {
            bitfield.set(index, *bit == 1).expect("index within length");
        }
        bitfield
    }

    #[test]
    fn superset_of_itself() {
        assert!(is_superset(&bits(&[1, 0, 1, 0]), &bits(&[1, 0, 1, 0])));
    }

    #[test]
    fn strict_superset_and_strict_subset() {
        assert!(is_superset(&bits(&[1, 0, 1, 0]), &bits(&[1, 0, 0, 0])));
        assert!(!is_superset(&bits(&[1, 0, 0, 0]), &bits(&[1, 0, 1, 0])));
    }

    #[test]
    fn incomparable_bitfields_match_neither_way() {
        assert!(!is_superset(&bits(&[1, 0, 1, 0]), &bits(&[0, 0, 0, 1])));
        assert!(!is_superset(&bits(&[0, 0, 0, 1]), &bits(&[1, 0, 1, 0])));
    }

    #[test]
    fn unequal_lengths_never_match() {
        assert!(!is_superset(&bits(&[1, 1, 1, 1]), &bits(&[1, 0])));
        assert!(!is_superset(&bits(&[1, 1]), &bits(&[1, 0, 0, 0])));
    }
}
