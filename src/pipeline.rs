//! Producer/consumer pipeline
//!
//! Wires the line source and the word filter together over a rendezvous
//! channel. The producer closes the channel by dropping its sender when the
//! input is exhausted; the consumer drains it, then returns the word index
//! from its thread. Joining the consumer is the only completion barrier, so
//! the index is never observed mid-write.

use crossbeam_channel::{bounded, Receiver, Sender};
use indicatif::ProgressBar;
use std::sync::Arc;
use std::thread;

use crate::cli::Args;
use crate::dedup::{create_deduplicator, Deduplicator};
use crate::error::SieveError;
use crate::filter::{LetterSet, WordFilter, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::index::WordIndex;
use crate::progress::{create_bytes_progress_bar, ProcessingStats};
use crate::source::WordSource;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct SieveConfig {
    pub letters: LetterSet,
    pub min_len: usize,
    pub max_len: usize,
    pub unique: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub show_stats: bool,
}

impl SieveConfig {
    pub fn from_args(args: &Args) -> Result<Self, SieveError> {
        Ok(Self {
            letters: LetterSet::new(&args.letters)?,
            min_len: MIN_WORD_LEN,
            max_len: MAX_WORD_LEN,
            unique: args.unique,
            quiet: args.quiet,
            verbose: args.verbose,
            show_stats: args.stats,
        })
    }

    /// Configuration for library use with everything but the letters defaulted.
    pub fn with_letters(letters: LetterSet) -> Self {
        Self {
            letters,
            min_len: MIN_WORD_LEN,
            max_len: MAX_WORD_LEN,
            unique: false,
            quiet: true,
            verbose: false,
            show_stats: false,
        }
    }
}

/// Sieve pipeline
pub struct Pipeline {
    config: SieveConfig,
    stats: Arc<ProcessingStats>,
}

impl Pipeline {
    pub fn new(config: SieveConfig) -> Self {
        Self {
            config,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Run the pipeline to completion and return the populated index.
    ///
    /// The channel is zero-capacity: every send blocks until the consumer
    /// takes the word, so the reader can never outrun the filter.
    pub fn run(&self, source: WordSource) -> anyhow::Result<WordIndex> {
        let filter = WordFilter::with_lengths(
            self.config.letters.clone(),
            self.config.min_len,
            self.config.max_len,
        );
        let dedup = create_deduplicator(self.config.unique);

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_bytes_progress_bar(source.size(), "Sieving...")
        };

        let (tx, rx) = bounded::<String>(0);

        let filter = &filter;
        let dedup = dedup.as_ref();
        let stats: &ProcessingStats = &self.stats;
        let producer_bar = pb.clone();

        let index = thread::scope(|s| -> anyhow::Result<WordIndex> {
            let producer = s.spawn(move || produce(source, tx, stats, producer_bar));
            let consumer = s.spawn(move || consume(rx, filter, dedup, stats));

            producer
                .join()
                .map_err(|_| anyhow::anyhow!("line source thread panicked"))?;
            consumer
                .join()
                .map_err(|_| anyhow::anyhow!("word filter thread panicked"))
        })?;

        pb.finish_and_clear();

        Ok(index)
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Statistics for this pipeline run.
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }
}

/// Line source stage: trim, skip empties, hand off.
///
/// Dropping the sender on return closes the channel; that is the completion
/// signal the consumer observes. A read error ends the stream like EOF.
fn produce(source: WordSource, tx: Sender<String>, stats: &ProcessingStats, pb: ProgressBar) {
    for line in source {
        match line {
            Ok(line) => {
                pb.inc(line.len() as u64 + 1);

                let word = line.trim();
                if word.is_empty() {
                    continue;
                }

                stats.add_candidate();

                if tx.send(word.to_string()).is_err() {
                    // receiver gone, nothing left to feed
                    break;
                }
            }
            Err(e) => {
                log::warn!("read error, treating as end of input: {}", e);
                break;
            }
        }
    }
}

/// Word filter stage: classify every candidate until the channel closes.
fn consume(
    rx: Receiver<String>,
    filter: &WordFilter,
    dedup: &dyn Deduplicator,
    stats: &ProcessingStats,
) -> WordIndex {
    let mut index = WordIndex::new();

    for word in rx {
        match filter.check(&word) {
            Ok(()) => {
                if dedup.insert(&word) {
                    stats.add_accepted();
                    index.insert(word);
                } else {
                    stats.add_duplicate();
                }
            }
            Err(reason) => {
                stats.add_rejected();
                log::debug!("rejected {:?}: {}", word, reason);
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    fn config(letters: &str) -> SieveConfig {
        SieveConfig::with_letters(LetterSet::new(letters).unwrap())
    }

    #[test]
    fn test_run_accepts_and_groups() {
        let file = dictionary(&["garden", "rage", "strange", "zzzzzz"]);
        let pipeline = Pipeline::new(config("adegnrst"));

        let source = WordSource::open(file.path()).unwrap();
        let index = pipeline.run(source).unwrap();

        assert_eq!(index.words_of(6), ["garden"]);
        assert_eq!(index.words_of(7), ["strange"]);
        assert!(index.words_of(8).is_empty());

        let stats = pipeline.stats();
        assert_eq!(stats.get_candidates(), 4);
        assert_eq!(stats.get_accepted(), 2);
        assert_eq!(stats.get_rejected(), 2);
    }

    #[test]
    fn test_run_skips_blank_and_padded_lines() {
        let file = dictionary(&["  garden  ", "", "   ", "garden"]);
        let pipeline = Pipeline::new(config("adegnr"));

        let source = WordSource::open(file.path()).unwrap();
        let index = pipeline.run(source).unwrap();

        // blank lines are not candidates; both real lines are kept
        assert_eq!(index.words_of(6), ["garden", "garden"]);
        assert_eq!(pipeline.stats().get_candidates(), 2);
    }

    #[test]
    fn test_run_unique_drops_duplicates() {
        let file = dictionary(&["garden", "garden", "garden"]);
        let mut cfg = config("adegnr");
        cfg.unique = true;
        let pipeline = Pipeline::new(cfg);

        let source = WordSource::open(file.path()).unwrap();
        let index = pipeline.run(source).unwrap();

        assert_eq!(index.words_of(6), ["garden"]);
        assert_eq!(pipeline.stats().get_duplicates(), 2);
    }

    #[test]
    fn test_run_empty_dictionary() {
        let file = dictionary(&[]);
        let pipeline = Pipeline::new(config("abc"));

        let source = WordSource::open(file.path()).unwrap();
        let index = pipeline.run(source).unwrap();

        assert!(index.is_empty());
    }
}
