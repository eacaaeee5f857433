//! Example: Clean a BibTeX file with bibtidy.
//!
//! Usage:
//!   cargo run --example clean -- <file_path>
//!
//! Example:
//!   cargo run --example clean -- references.bib

use std::env;
use std::path::Path;

use bibtidy::Cleaner;

fn main() -> bibtidy::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example clean -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example clean -- references.bib");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let cleaner = Cleaner::new();
    let result = cleaner.clean(path)?;

    println!("## Source");
    println!("  File: {}", result.source.file);
    println!("  Records: {}", result.source.record_count);
    println!("  Hash: {}", result.source.hash);
    println!();

    println!("## Changes");
    for record_change in &result.report.changes {
        for change in &record_change.changes {
            println!("  {}: {}", record_change.key, change.description());
        }
    }
    println!();

    println!("## Summary");
    println!("  Records modified: {}", result.report.records_modified);
    println!("  Years extracted: {}", result.report.years_extracted);
    println!("  Unparsed dates: {}", result.report.unparsed_dates);
    println!("  Titles recased: {}", result.report.titles_recased);
    println!();

    print!("{}", result.output);

    Ok(())
}
