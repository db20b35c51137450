use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to list working directory: {0}")]
    Listing(#[source] std::io::Error),

    #[error(transparent)]
    Pack(#[from] texpack::Error),
}
