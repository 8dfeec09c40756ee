use std::{io, path::PathBuf};

use crate::util::types::Size;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(
        #[source]
        #[from]
        io::Error,
    ),
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("client command is empty")]
    EmptyCommand,
    #[error("{rows} rows cannot be split into batches of {batch_size}")]
    UnevenBatches { rows: Size, batch_size: Size },
    #[error("invalid table spec: {0}")]
    InvalidSpec(String),
    #[error("cannot summarize an empty set of samples")]
    NoSamples,
    #[error("gnuplot failed to render {path:?}: {reason}")]
    Plot { path: PathBuf, reason: String },
    #[error("bincode: {0}")]
    Bincode(
        #[source]
        #[from]
        Box<bincode::ErrorKind>,
    ),
}
