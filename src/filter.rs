//! Word filtering module
//!
//! Provides the letter-multiset membership predicate: a word is accepted when
//! every one of its characters can be matched one-to-one against an entry of
//! the configured letter set.

use std::fmt;

use crate::error::SieveError;

/// Shortest word length that is reported
pub const MIN_WORD_LEN: usize = 6;

/// Longest word length that is reported
pub const MAX_WORD_LEN: usize = 8;

/// Sentinel written over consumed positions during masking.
/// Must be a byte that cannot appear in a command-line letter set.
const MASKED: u8 = 0x00;

/// The multiset of letters words may be built from.
///
/// Repeated letters matter: a set of `"aab"` lets a word use `a` twice
/// and `b` once.
#[derive(Debug, Clone)]
pub struct LetterSet {
    letters: String,
}

impl LetterSet {
    /// Create a letter set from the caller-supplied string.
    pub fn new(letters: &str) -> Result<Self, SieveError> {
        if letters.is_empty() {
            return Err(SieveError::EmptyLetterSet);
        }

        Ok(Self {
            letters: letters.to_string(),
        })
    }

    /// Iterate the set's bytes in their original order, repeats included.
    #[inline]
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters.bytes()
    }

    /// Check whether a byte is one of the set's letters.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        memchr::memchr(byte, self.letters.as_bytes()).is_some()
    }

    /// Number of entries in the set, repeats included.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Why a candidate word was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Word length outside the reported range
    Length(usize),
    /// Word shares no letter with the set
    NoSetLetters,
    /// A character survived masking: the word uses it more times than the
    /// set supplies (or the set does not contain it at all)
    Unmatched { position: usize, byte: u8 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Length(len) => write!(f, "length {} out of range", len),
            Rejection::NoSetLetters => write!(f, "no letters from the set"),
            Rejection::Unmatched { position, byte } => {
                write!(f, "unmatched {:?} at position {}", *byte as char, position)
            }
        }
    }
}

/// Letter-multiset membership filter
#[derive(Debug, Clone)]
pub struct WordFilter {
    letters: LetterSet,
    min_len: usize,
    max_len: usize,
}

impl WordFilter {
    /// Create a filter for the default reported length range.
    pub fn new(letters: LetterSet) -> Self {
        Self::with_lengths(letters, MIN_WORD_LEN, MAX_WORD_LEN)
    }

    /// Create a filter with explicit length bounds.
    pub fn with_lengths(letters: LetterSet, min_len: usize, max_len: usize) -> Self {
        Self {
            letters,
            min_len,
            max_len,
        }
    }

    /// Check a candidate word, reporting why it fails.
    ///
    /// Masking walks the letter set in order, one pass per entry: each pass
    /// consumes the first remaining occurrence of that letter in the word.
    /// A set entry with no remaining occurrence is skipped. The word is
    /// accepted when every position has been consumed.
    pub fn check(&self, word: &str) -> Result<(), Rejection> {
        let len = word.len();
        if len < self.min_len || len > self.max_len {
            return Err(Rejection::Length(len));
        }

        if !word.bytes().any(|b| self.letters.contains(b)) {
            return Err(Rejection::NoSetLetters);
        }

        let mut buf = word.as_bytes().to_vec();
        for letter in self.letters.bytes() {
            if let Some(i) = memchr::memchr(letter, &buf) {
                buf[i] = MASKED;
                log::trace!(
                    "masked {:?} at position {} of {:?}",
                    letter as char,
                    i,
                    word
                );
            }
        }

        match buf.iter().position(|&b| b != MASKED) {
            Some(position) => Err(Rejection::Unmatched {
                position,
                byte: word.as_bytes()[position],
            }),
            None => Ok(()),
        }
    }

    /// Check whether a candidate word passes the filter.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }

    /// The letter set this filter matches against.
    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The accepted length range, inclusive.
    pub fn length_range(&self) -> (usize, usize) {
        (self.min_len, self.max_len)
    }
}
