pub mod errors;
pub mod signature;

pub use signature::BLSSignature;
