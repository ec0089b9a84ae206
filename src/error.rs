use thiserror::Error;

/// Errors raised while reading links or decomposing blocks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed link record: {0}")]
    MalformedLink(String),

    /// A split component left the decomposition without an S/P/R kind.
    #[error("component {component} of the triconnected decomposition has no S/P/R kind")]
    UnclassifiedSkeleton { component: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
