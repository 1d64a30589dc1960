//! Error types for the sieve
//!
//! Both variants are fatal and raised before any pipeline thread starts;
//! mid-stream read errors are handled by the line source itself.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup errors
#[derive(Error, Debug)]
pub enum SieveError {
    /// No letters supplied on the command line
    #[error("no letters supplied; pass the letter set as the first argument")]
    EmptyLetterSet,

    /// The dictionary file could not be opened
    #[error("cannot open dictionary {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
