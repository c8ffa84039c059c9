// src/error.rs
use thiserror::Error;

use crate::core::net::NetError;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end a run. Each variant marks how far the run got:
/// fetch and parse failures happen before anything is written to the store,
/// appearance failures before any graph mutation, and post failures part-way
/// through the mutation loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error("GET {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: NetError,
    },

    #[error("could not parse icon page: {0}")]
    Parse(String),

    #[error("PUT {url} failed: {source}")]
    PutAppearances {
        url: String,
        #[source]
        source: NetError,
    },

    #[error("request timed out creating icon `{icon}` ({applied}/{total} icons applied)")]
    PostTimeout {
        icon: String,
        applied: usize,
        total: usize,
    },

    #[error("creating icon `{icon}` failed ({applied}/{total} icons applied): {source}")]
    PostFailed {
        icon: String,
        applied: usize,
        total: usize,
        #[source]
        source: NetError,
    },

    #[error("could not encode node appearances: {0}")]
    Serialize(#[from] serde_json::Error),
}
