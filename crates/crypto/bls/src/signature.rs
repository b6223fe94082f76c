use std::str::FromStr;

use alloy_primitives::hex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum::U96};
use tree_hash_derive::TreeHash;

use crate::errors::BLSError;

/// An aggregate BLS signature in compressed form. Reef treats signatures as
/// opaque: verification and aggregation happen in the caller's signing
/// backend, not here.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash, Default, Eq, Hash)]
pub struct BLSSignature {
    pub inner: FixedVector<u8, U96>,
}

impl Serialize for BLSSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let val = format!("0x{}", hex::encode(self.inner.as_ssz_bytes()));
        serializer.serialize_str(&val)
    }
}

impl<'de> Deserialize<'de> for BLSSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let result: String = Deserialize::deserialize(deserializer)?;
        let result = hex::decode(&result).map_err(serde::de::Error::custom)?;
        let signature = FixedVector::from(result);
        Ok(Self { inner: signature })
    }
}

impl BLSSignature {
    pub fn to_bytes(&self) -> &[u8] {
        self.inner.iter().as_slice()
    }
}

impl From<[u8; 96]> for BLSSignature {
    fn from(bytes: [u8; 96]) -> Self {
        Self {
            inner: FixedVector::from(bytes.to_vec()),
        }
    }
}

impl FromStr for BLSSignature {
    type Err = BLSError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(clean_str).map_err(|_| BLSError::InvalidHexString)?;

        if bytes.len() != 96 {
            return Err(BLSError::InvalidByteLength);
        }

        Ok(BLSSignature {
            inner: FixedVector::from(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{BLSError, BLSSignature};

    #[test]
    fn parses_hex_with_and_without_prefix() {
        let hex_str = format!("0x{}", "ab".repeat(96));

        let signature = BLSSignature::from_str(&hex_str).expect("valid signature hex");
        assert_eq!(signature, BLSSignature::from([0xab; 96]));
        assert_eq!(signature.to_bytes(), [0xab; 96]);

        let unprefixed = BLSSignature::from_str(&"ab".repeat(96)).expect("valid signature hex");
        assert_eq!(unprefixed, signature);
    }

    #[test]
    fn rejects_wrong_lengths_and_bad_hex() {
        assert_eq!(
            BLSSignature::from_str(&"ab".repeat(48)),
            Err(BLSError::InvalidByteLength)
        );
        assert_eq!(
            BLSSignature::from_str("0xzz"),
            Err(BLSError::InvalidHexString)
        );
    }
}
