use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Wrong password, truncated token or tampered token; the cause is not reported.
    #[error("Authentication failed")]
    AuthenticationFailure,

    #[error("Invalid key length")]
    InvalidKeyLength,
}
