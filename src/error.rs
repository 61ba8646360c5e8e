use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An inline style string could not be split into declarations
    #[error("invalid style declarations, could not read {rest:?}")]
    InvalidStyle { rest: String },

    #[error("unknown demo {0:?}")]
    UnknownDemo(String),

    #[error(transparent)]
    Args(#[from] pico_args::Error),
}
