use thiserror::Error;

#[derive(Error, PartialEq, Debug)]
pub enum BLSError {
    #[error("invalid byte length")]
    InvalidByteLength,
    #[error("invalid hex string")]
    InvalidHexString,
}
