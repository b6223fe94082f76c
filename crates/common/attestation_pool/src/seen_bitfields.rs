use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use alloy_primitives::B256;
use parking_lot::Mutex;
use reef_consensus::constants::{SECONDS_PER_SLOT, SLOTS_PER_EPOCH};

use crate::bitfields::{AggregationBits, is_superset};

/// How long a recorded bitfield stays relevant. One epoch: past that, the
/// attestations it suppressed can no longer be included in a block anyway.
pub const DEFAULT_SEEN_BITFIELD_TTL: Duration =
    Duration::from_secs(SLOTS_PER_EPOCH * SECONDS_PER_SLOT);

#[derive(Debug)]
struct SeenEntry {
    bitfields: Vec<AggregationBits>,
    expires_at: Instant,
}

/// Time-expiring record of which signer bitfields have already been absorbed
/// into accepted aggregates, keyed by the attestation data root. Expiry is
/// checked lazily on access; an expired entry behaves as absent everywhere.
///
/// Self-synchronizing: safe to call with or without the pool lock held, and
/// never calls back into the pool.
#[derive(Debug)]
pub struct SeenBitfieldCache {
    ttl: Duration,
    entries: Mutex<HashMap<B256, SeenEntry>>,
}

impl Default for SeenBitfieldCache {
    fn default() -> Self {
        Self::new(DEFAULT_SEEN_BITFIELD_TTL)
    }
}

impl SeenBitfieldCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Records `aggregation_bits` as seen under `data_root` and resets the
    /// entry's expiry to now + TTL.
    pub fn record(&self, data_root: B256, aggregation_bits: AggregationBits) {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let entry = entries.entry(data_root).or_insert_with(|| SeenEntry {
            bitfields: Vec::new(),
            expires_at: now + self.ttl,
        });
        if entry.expires_at <= now {
            entry.bitfields.clear();
        }
        entry.bitfields.push(aggregation_bits);
        entry.expires_at = now + self.ttl;
    }

    /// True iff a live entry for `data_root` holds a bitfield of equal length
    /// covering every signer in `aggregation_bits`. Purges the entry if it
    /// has expired.
    pub fn is_covered(&self, data_root: &B256, aggregation_bits: &AggregationBits) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let Some(entry) = entries.get(data_root) else {
            return false;
        };
        if entry.expires_at <= now {
            entries.remove(data_root);
            return false;
        }
        entry
            .bitfields
            .iter()
            .any(|seen| is_superset(seen, aggregation_bits))
    }

    /// Drops every expired entry.
    pub fn prune(&self) {
        let now = Instant::now();
        self.entries.lock().retain(|_, entry| entry.expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
