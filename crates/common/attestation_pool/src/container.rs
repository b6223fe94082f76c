use reef_bls::BLSSignature;
use reef_consensus::{attestation::Attestation, attestation_data::AttestationData};

use crate::bitfields::{AggregationBits, is_superset};

/// An aggregate signature together with the bitfield of the committee members
/// it covers. The signature is valid for exactly the signers in the bitfield.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SignaturePair {
    pub aggregation_bits: AggregationBits,
    pub signature: BLSSignature,
}

/// All partial aggregates sharing one [`AttestationData`], kept as the
/// maximal antichain under signer-set containment: no stored bitfield is a
/// subset of another. Shrinks only when a new aggregate eclipses stored ones.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AttestationContainer {
    pub data: AttestationData,
    pub signature_pairs: Vec<SignaturePair>,
}

impl AttestationContainer {
    /// Builds a container from attestations sharing identical data. The
    /// caller guarantees that the data matches; it is taken from the first
    /// element and not validated here.
    ///
    /// # Panics
    ///
    /// Panics if `attestations` is empty.
    pub fn from_attestations(attestations: &[Attestation]) -> Self {
        assert!(!attestations.is_empty(), "no attestations provided");

        let signature_pairs = attestations
            .iter()
            .map(|attestation| SignaturePair {
                aggregation_bits: attestation.aggregation_bits.clone(),
                signature: attestation.signature.clone(),
            })
            .collect();

        Self {
            data: attestations[0].data,
            signature_pairs,
        }
    }

    /// True iff some stored aggregate already covers every signer of
    /// `attestation`.
    pub fn contains(&self, attestation: &Attestation) -> bool {
        self.signature_pairs
            .iter()
            .any(|pair| is_superset(&pair.aggregation_bits, &attestation.aggregation_bits))
    }

    /// Folds `attestation` into the antichain:
    ///
    /// - if an existing aggregate covers all of its signers, nothing changes
    ///   (an identical bitfield is covered by itself, so exact duplicates are
    ///   not re-added);
    /// - otherwise every stored aggregate eclipsed by it is dropped and its
    ///   signature pair is appended.
    ///
    /// Surviving pairs keep their relative order. One linear scan.
    pub fn insert_attestation(&mut self, attestation: &Attestation) {
        let mut pairs_not_eclipsed = Vec::with_capacity(self.signature_pairs.len() + 1);

        for pair in &self.signature_pairs {
            if is_superset(&pair.aggregation_bits, &attestation.aggregation_bits) {
                return;
            }
            if !is_superset(&attestation.aggregation_bits, &pair.aggregation_bits) {
                pairs_not_eclipsed.push(pair.clone());
            }
        }

        pairs_not_eclipsed.push(SignaturePair {
            aggregation_bits: attestation.aggregation_bits.clone(),
            signature: attestation.signature.clone(),
        });
        self.signature_pairs = pairs_not_eclipsed;
    }

    /// Expands the container back into full attestations, one per stored
    /// pair, all sharing the container's data, in internal pair order.
    pub fn to_attestations(&self) -> Vec<Attestation> {
        self.signature_pairs
            .iter()
            .map(|pair| Attestation {
                aggregation_bits: pair.aggregation_bits.clone(),
                data: self.data,
                signature: pair.signature.clone(),
            })
            .collect()
    }
}
