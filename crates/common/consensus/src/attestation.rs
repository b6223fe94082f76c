use reef_bls::BLSSignature;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{BitList, typenum::U131072};
use tree_hash_derive::TreeHash;

use crate::attestation_data::AttestationData;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Attestation {
    pub aggregation_bits: BitList<U131072>,
    pub data: AttestationData,
    pub signature: BLSSignature,
}

impl Attestation {
    pub fn num_signers(&self) -> usize {
        self.aggregation_bits.num_set_bits()
    }

    /// An attestation is aggregated once more than one committee member has
    /// signed it. Unaggregated pools only accept singleton-signer votes.
    pub fn is_aggregated(&self) -> bool {
        self.num_signers() > 1
    }
}
