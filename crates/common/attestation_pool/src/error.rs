use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AttestationPoolError {
    /// The attestation carries more than one signer. The unaggregated pool
    /// only accepts singleton-signer votes.
    #[error("attestation is aggregated")]
    AlreadyAggregated,
}
