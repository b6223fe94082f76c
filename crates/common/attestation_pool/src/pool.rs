use std::{collections::HashMap, sync::Arc};

use alloy_primitives::B256;
use parking_lot::RwLock;
use reef_consensus::attestation::Attestation;
use tracing::debug;
use tree_hash::TreeHash;

use crate::{error::AttestationPoolError, seen_bitfields::SeenBitfieldCache};

/// Pool of raw single-signer attestations awaiting aggregation.
///
/// Entries are keyed by the tree-hash root of the whole attestation (data,
/// bitfield and signature), while the seen-bitfield cache is consulted under
/// the root of the attestation data alone. The data root groups every vote
/// on the same subject regardless of signer; the full root keeps distinct
/// votes from colliding. The two identities are deliberately not collapsed.
#[derive(Debug, Default)]
pub struct AttestationPool {
    unaggregated_attestations: RwLock<HashMap<B256, Attestation>>,
    seen_bitfields: Arc<SeenBitfieldCache>,
}

impl AttestationPool {
    /// Builds a pool around a shared seen-bitfield cache. The cache outlives
    /// and is not owned by the pool; several pools may share one.
    pub fn new(seen_bitfields: Arc<SeenBitfieldCache>) -> Self {
        Self {
            unaggregated_attestations: RwLock::default(),
            seen_bitfields,
        }
    }

    pub fn seen_bitfields(&self) -> &Arc<SeenBitfieldCache> {
        &self.seen_bitfields
    }

    /// Saves an unaggregated attestation. Silently skips attestations whose
    /// signers are already covered by a previously accepted aggregate.
    /// Saving an identical attestation twice is idempotent.
    pub fn save_unaggregated_attestation(
        &self,
        attestation: &Attestation,
    ) -> Result<(), AttestationPoolError> {
        if attestation.is_aggregated() {
            return Err(AttestationPoolError::AlreadyAggregated);
        }

        let data_root = attestation.data.tree_hash_root();
        if self
            .seen_bitfields
            .is_covered(&data_root, &attestation.aggregation_bits)
        {
            return Ok(());
        }

        let attestation_root = attestation.tree_hash_root();
        self.unaggregated_attestations
            .write()
            .insert(attestation_root, attestation.clone());

        Ok(())
    }

    /// Saves attestations in order, stopping at the first failure. Earlier
    /// saves stay committed.
    pub fn save_unaggregated_attestations(
        &self,
        attestations: &[Attestation],
    ) -> Result<(), AttestationPoolError> {
        for attestation in attestations {
            self.save_unaggregated_attestation(attestation)?;
        }

        Ok(())
    }

    /// Returns every pooled attestation, in map order. Takes the write lock:
    /// entries that the seen-bitfield cache now covers are evicted as a side
    /// effect, so this call may shrink the pool.
    pub fn unaggregated_attestations(&self) -> Vec<Attestation> {
        self.seen_bitfields.prune();

        let mut unaggregated_attestations = self.unaggregated_attestations.write();
        let mut attestations = Vec::with_capacity(unaggregated_attestations.len());

        unaggregated_attestations.retain(|attestation_root, attestation| {
            let data_root = attestation.data.tree_hash_root();
            if self
                .seen_bitfields
                .is_covered(&data_root, &attestation.aggregation_bits)
            {
                debug!(
                    %attestation_root,
                    slot = attestation.data.slot,
                    committee_index = attestation.data.index,
                    "evicting attestation covered by an accepted aggregate"
                );
                return false;
            }
            attestations.push(attestation.clone());
            true
        });

        attestations
    }

    /// Returns the pooled attestations for an exact `(slot, committee_index)`
    /// match. Pure read path: no eviction, read lock only.
    pub fn unaggregated_attestations_by_slot_index(
        &self,
        slot: u64,
        committee_index: u64,
    ) -> Vec<Attestation> {
        self.unaggregated_attestations
            .read()
            .values()
            .filter(|attestation| {
                attestation.data.slot == slot && attestation.data.index == committee_index
            })
            .cloned()
            .collect()
    }

    /// Deletes an attestation (typically because it was included on-chain)
    /// and records its bitfield as seen, so that it and any vote it covers
    /// cannot be resaved while the record lives.
    pub fn delete_unaggregated_attestation(
        &self,
        attestation: &Attestation,
    ) -> Result<(), AttestationPoolError> {
        if attestation.is_aggregated() {
            return Err(AttestationPoolError::AlreadyAggregated);
        }

        let attestation_root = attestation.tree_hash_root();
        self.unaggregated_attestations
            .write()
            .remove(&attestation_root);

        let data_root = attestation.data.tree_hash_root();
        self.seen_bitfields
            .record(data_root, attestation.aggregation_bits.clone());

        Ok(())
    }

    pub fn unaggregated_attestation_count(&self) -> usize {
        self.unaggregated_attestations.read().len()
    }
}
