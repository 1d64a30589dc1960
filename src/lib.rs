//! # Letter Sieve
//!
//! Dictionary sieve: find words buildable from a multiset of letters.
//!
//! ## Features
//!
//! - **Multiset matching**: a word may use a letter at most as many times as
//!   it appears in the letter set
//! - **Length grouping**: accepted words are reported in 6- to 8-letter
//!   buckets, in dictionary order
//! - **Streaming pipeline**: reader and filter run concurrently over a
//!   rendezvous channel with natural backpressure
//! - **Rejection diagnostics**: verbose mode explains why each word was
//!   turned away
//!
//! ## Usage
//!
//! ```bash
//! # Words buildable from the letters of "triangles"
//! letter-sieve triangles
//!
//! # Custom dictionary, duplicates suppressed
//! letter-sieve -f wordlist.txt -u triangles
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use letter_sieve::filter::LetterSet;
//! use letter_sieve::pipeline::{Pipeline, SieveConfig};
//! use letter_sieve::source::WordSource;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let letters = LetterSet::new("triangles")?;
//! let source = WordSource::open(Path::new("/usr/share/dict/words"))?;
//!
//! let pipeline = Pipeline::new(SieveConfig::with_letters(letters));
//! let index = pipeline.run(source)?;
//!
//! for (length, words) in index.iter() {
//!     println!("{}: {} words", length, words.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod index;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod source;

pub use cli::Args;
pub use error::SieveError;
pub use filter::{LetterSet, WordFilter, MAX_WORD_LEN, MIN_WORD_LEN};
pub use index::WordIndex;
pub use pipeline::{Pipeline, SieveConfig};
