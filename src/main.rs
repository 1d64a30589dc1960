//! Letter Sieve - find words buildable from a multiset of letters
//!
//! Main entry point for the command-line application.

use bytesize::ByteSize;
use clap::Parser;
use std::process;

use letter_sieve::cli::Args;
use letter_sieve::pipeline::{Pipeline, SieveConfig};
use letter_sieve::progress::{print_error, print_header, print_info, print_warning};
use letter_sieve::report::print_report;
use letter_sieve::source::WordSource;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; verbose exposes rejection reasons and masking steps
    if args.verbose {
        std::env::set_var("RUST_LOG", "trace");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Build pipeline configuration; rejects an empty letter set
    let config = SieveConfig::from_args(&args)?;

    // Open the dictionary before any thread spawns; failure is fatal here
    let source = WordSource::open(&args.file)?;

    if !args.quiet {
        print_header("Sieving dictionary...");
        print_info(&format!(
            "Dictionary: {:?} ({})",
            source.path(),
            ByteSize(source.size())
        ));
        print_info(&format!("Letters:    {}", config.letters));
    }

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    // Run the pipeline; the report only starts after both stages joined
    let pipeline = Pipeline::new(config);
    let index = pipeline.run(source)?;

    if !args.quiet && index.is_empty() {
        print_warning("No words matched the letter set");
    }

    print_report(
        &index,
        pipeline.config().min_len,
        pipeline.config().max_len,
    )?;

    if args.stats && !args.quiet {
        pipeline.stats().print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &SieveConfig) {
    print_info(&format!(
        "Lengths:    {}..={}",
        config.min_len, config.max_len
    ));
    print_info(&format!("Unique:     {}", config.unique));
    print_info(&format!("Stats:      {}", config.show_stats));
}
