use thiserror::Error;

/// Everything that can go wrong during a lookup.
///
/// Callers are expected to branch on the variant, e.g. to fall back
/// to another provider on [`Error::NoResult`] or [`Error::QuotaExceeded`].
#[derive(Debug, Error)]
pub enum Error {
    /// The request cannot be handled by the provider.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// The upstream service denied access, e.g. because the
    /// quota is exhausted or the account has issues.
    #[error("There are account issues and query was not successfully executed: {0}")]
    QuotaExceeded(String),
    #[error("Could not find results for given query: {0}")]
    NoResult(String),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    /// The upstream content is not what the provider expects.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The HTTP adapter failed to fetch the content.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
