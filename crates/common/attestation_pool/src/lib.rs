pub mod bitfields;
pub mod container;
pub mod error;
pub mod pool;
pub mod seen_bitfields;

pub use bitfields::AggregationBits;
pub use container::{AttestationContainer, SignaturePair};
pub use error::AttestationPoolError;
pub use pool::AttestationPool;
pub use seen_bitfields::SeenBitfieldCache;
