pub const SLOTS_PER_EPOCH: u64 = 32;
pub const SECONDS_PER_SLOT: u64 = 12;
pub const MAX_COMMITTEES_PER_SLOT: u64 = 64;
pub const MAX_VALIDATORS_PER_COMMITTEE: u64 = 2048;
