//! Command implementations.

pub mod clean;
pub mod dates;
pub mod titles;

use std::path::PathBuf;

use colored::Colorize;

use bibtidy::{FieldChange, NormalizeResult, Normalizer, NormalizerConfig, Parser};

/// Shared pipeline behind the three subcommands: parse, normalize record by
/// record with a progress line each, write the output, optionally save the
/// ledger.
pub(crate) fn execute(
    file: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    verbose: bool,
    config: NormalizerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Normalizing".cyan().bold(),
        file.display().to_string().white()
    );

    let (mut database, source) = Parser::new().parse_file(&file)?;

    if verbose {
        println!(
            "  {} records, {} bytes, {}",
            source.record_count, source.size_bytes, source.hash
        );
    }
    println!();

    let normalizer = Normalizer::with_config(config);
    let mut result = NormalizeResult::new();
    for record in database.records.iter_mut() {
        let changes = normalizer.normalize_record(record);
        print_record_progress(&record.key, &changes);
        result.add_record(record.key.clone(), changes);
    }

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_tidy.bib", stem))
    });

    bibtidy::Formatter::new().write_file(&database, &output_path)?;

    if let Some(report_path) = report {
        result.save(&report_path)?;
        println!();
        println!(
            "{} {}",
            "Report saved to".green().bold(),
            report_path.display().to_string().white()
        );
    }

    println!();
    print_summary(&result);
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

/// One progress line per record.
fn print_record_progress(key: &str, changes: &[FieldChange]) {
    if changes.is_empty() {
        println!("  {} {}", key.dimmed(), "unchanged".dimmed());
        return;
    }
    for change in changes {
        if change.is_warning() {
            println!(
                "  {} {}: {}",
                "warning".yellow().bold(),
                key,
                change.description()
            );
        } else {
            println!("  {} {}", key.cyan(), change.description());
        }
    }
}

/// Counter summary for the run.
fn print_summary(result: &NormalizeResult) {
    println!(
        "Modified {} of {} records ({} years extracted, {} dates commented, {} months commented, {} titles recased, {} unparsed dates)",
        result.records_modified.to_string().white().bold(),
        result.records_processed,
        result.years_extracted.to_string().cyan(),
        result.dates_annotated.to_string().cyan(),
        result.months_annotated.to_string().cyan(),
        result.titles_recased.to_string().cyan(),
        result.unparsed_dates.to_string().yellow()
    );
}
