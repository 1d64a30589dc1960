//! Command-line interface definition for letter-sieve
//!
//! Provides argument parsing for the dictionary sieve.

use clap::Parser;
use std::path::PathBuf;

/// Default dictionary location
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Dictionary sieve - find words buildable from a multiset of letters
///
/// Reads a dictionary file and reports every 6- to 8-letter word that can be
/// assembled from the supplied letters, grouped by length.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "letter-sieve",
    author = "m0h1nd4",
    version,
    about = "Dictionary sieve - find words buildable from a multiset of letters",
    long_about = r#"
Reads a dictionary file and reports every 6- to 8-letter word that can be
assembled from the supplied letters, grouped by length.

The letters form a multiset: a word may use a letter at most as many times as
it appears in the set, so "aab" allows two a's but only one b.

EXAMPLES:
    # Words buildable from the letters of "triangles"
    letter-sieve triangles

    # Use a custom dictionary
    letter-sieve -f ./wordlist.txt triangles

    # Explain every rejection
    letter-sieve -v triangles

    # Suppress repeated dictionary entries
    letter-sieve -u triangles
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/letter-sieve"
)]
pub struct Args {
    /// Letters available for building words; repeats allow repeated use
    #[arg(value_name = "LETTERS")]
    pub letters: String,

    /// Dictionary file to read, one word per line
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = DEFAULT_DICTIONARY)]
    pub file: PathBuf,

    /// Report each accepted word only once
    #[arg(short, long, default_value_t = false)]
    pub unique: bool,

    /// Show processing statistics after the report
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - report only, no status output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - log why words were rejected
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
