//! Report writer
//!
//! Renders the word index as a grouped listing, one section per length in the
//! reported range. Lengths with no accepted words still get their header.

use std::io::Write;

use crate::index::WordIndex;

/// Write the grouped listing for every length in `min_len..=max_len`.
pub fn write_report<W: Write>(
    out: &mut W,
    index: &WordIndex,
    min_len: usize,
    max_len: usize,
) -> anyhow::Result<()> {
    for length in min_len..=max_len {
        writeln!(out, "{}-letter words", length)?;
        for (n, word) in index.words_of(length).iter().enumerate() {
            writeln!(out, "{:4}. {}", n + 1, word)?;
        }
    }
    Ok(())
}

/// Write the report to stdout.
pub fn print_report(index: &WordIndex, min_len: usize, max_len: usize) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, index, min_len, max_len)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(index: &WordIndex) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, index, 6, 8).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_format() {
        let mut index = WordIndex::new();
        index.insert("garden".to_string());
        index.insert("grange".to_string());
        index.insert("strange".to_string());

        let report = render(&index);
        assert_eq!(
            report,
            "6-letter words\n\
             \x20  1. garden\n\
             \x20  2. grange\n\
             7-letter words\n\
             \x20  1. strange\n\
             8-letter words\n"
        );
    }

    #[test]
    fn test_empty_buckets_keep_headers() {
        let index = WordIndex::new();
        let report = render(&index);
        assert_eq!(report, "6-letter words\n7-letter words\n8-letter words\n");
    }

    #[test]
    fn test_enumeration_is_right_aligned() {
        let mut index = WordIndex::new();
        for _ in 0..12 {
            index.insert("garden".to_string());
        }

        let report = render(&index);
        assert!(report.contains("   9. garden\n"));
        assert!(report.contains("  10. garden\n"));
    }
}
