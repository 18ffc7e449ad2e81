use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The downstream sink rejected a write or flush.
    #[error("failed to write interpolated output: {0}")]
    Sink(#[from] io::Error),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Sink(inner) => inner,
        }
    }
}
