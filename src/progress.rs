//! Status display module
//!
//! Styled status messages, the byte progress bar driven by the line source,
//! and the processing statistics printed after a run.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create the byte-progress bar for a dictionary scan
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Processing statistics for a pipeline run
#[derive(Debug)]
pub struct ProcessingStats {
    pub candidates: AtomicU64,
    pub accepted: AtomicU64,
    pub rejected: AtomicU64,
    pub duplicates: AtomicU64,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            candidates: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            duplicates: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_candidate(&self) {
        self.candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_duplicate(&self) {
        self.duplicates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_candidates(&self) -> u64 {
        self.candidates.load(Ordering::Relaxed)
    }

    pub fn get_accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn get_rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn get_duplicates(&self) -> u64 {
        self.duplicates.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn candidates_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.get_candidates() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let candidates = self.get_candidates();
        let accepted = self.get_accepted();
        let rejected = self.get_rejected();
        let duplicates = self.get_duplicates();

        println!();
        println!("{}", "═".repeat(50).green());
        println!("{}", "               SIEVE COMPLETE".green().bold());
        println!("{}", "═".repeat(50).green());
        println!();

        println!("  {} {}", "Candidates:  ".green(), format_number(candidates));
        println!(
            "  {} {}",
            "Accepted:    ".green().bold(),
            format_number(accepted).green().bold()
        );
        println!("  {} {}", "Rejected:    ".green(), format_number(rejected));

        if duplicates > 0 {
            println!(
                "  {} {}",
                "Duplicates:  ".yellow(),
                format_number(duplicates).yellow()
            );
        }

        println!();
        println!("  {} {:?}", "Duration:    ".green(), self.elapsed());
        println!(
            "  {} {:.2} words/sec",
            "Throughput:  ".green(),
            self.candidates_per_second()
        );
        println!();
        println!("{}", "═".repeat(50).green());
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
