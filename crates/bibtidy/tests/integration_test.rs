//! Integration tests for bibtidy.

use std::io::Write;
use tempfile::NamedTempFile;

use bibtidy::{Cleaner, CleanerConfig, FieldStyle, Formatter, NormalizerConfig, Parser};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-End Normalization Tests
// =============================================================================

#[test]
fn test_article_date_becomes_year() {
    let content = "@article{smith21,\n  author = {Smith, Jane},\n  title = {An okay title},\n  date = {2021-05}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("smith21").unwrap();
    assert_eq!(record.field("year").unwrap().raw, "2021");
    assert!(!record.has_field("date"));
    assert_eq!(record.annotation_count(), 1);
    assert_eq!(
        record.field("__comment1").unwrap().raw,
        "Original date = {2021-05}"
    );
}

#[test]
fn test_unparsable_date_left_in_place() {
    let content = "@article{odd1,\n  date = {sometime}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("odd1").unwrap();
    assert_eq!(record.field("date").unwrap().raw, "sometime");
    assert!(!record.has_field("year"));
    assert_eq!(
        record.field("__comment1").unwrap().raw,
        "Unparsed date = {sometime}"
    );
    assert_eq!(result.report.unparsed_dates, 1);
}

#[test]
fn test_book_title_is_left_alone() {
    let content = "@book{b1,\n  title = {The ART Of Computer Programming}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("b1").unwrap();
    assert_eq!(record.field("title").unwrap().raw, "The ART Of Computer Programming");
    assert!(result.report.is_clean());
}

#[test]
fn test_misc_title_recased_but_dates_skipped() {
    let content = "@misc{m1,\n  title = {Some Shouty Title},\n  date = {2020},\n  month = {jan}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("m1").unwrap();
    // Title-relevant, but not date/month-relevant.
    assert_eq!(record.field("title").unwrap().raw, "Some shouty title");
    assert_eq!(record.field("date").unwrap().raw, "2020");
    assert_eq!(record.field("month").unwrap().raw, "jan");
    assert!(!record.has_field("year"));
}

#[test]
fn test_entry_type_matching_is_case_insensitive() {
    let content = "@ARTICLE{caps1,\n  date = {1998}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("caps1").unwrap();
    assert_eq!(record.field("year").unwrap().raw, "1998");
    // The original spelling survives in the output.
    assert!(result.output.starts_with("@ARTICLE{caps1,"));
}

#[test]
fn test_month_commented_for_proceedings() {
    let content = "@proceedings{p1,\n  year = {2010},\n  month = {June}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("p1").unwrap();
    assert!(!record.has_field("month"));
    assert_eq!(
        record.field("__comment1").unwrap().raw,
        "Original month = {June}"
    );
    assert_eq!(result.report.months_annotated, 1);
}

#[test]
fn test_annotations_stack_without_collisions() {
    let content = "@article{a1,\n  __comment1 = \"kept from an earlier run\",\n  date = {2002-01-01},\n  year = {2002},\n  month = {1}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let record = result.database.get("a1").unwrap();
    assert_eq!(
        record.field("__comment1").unwrap().raw,
        "kept from an earlier run"
    );
    assert_eq!(
        record.field("__comment2").unwrap().raw,
        "Original date = {2002-01-01}"
    );
    assert_eq!(
        record.field("__comment3").unwrap().raw,
        "Original month = {1}"
    );
}

// =============================================================================
// Output Fidelity Tests
// =============================================================================

#[test]
fn test_output_annotation_is_quoted_and_year_braced() {
    let content = "@article{a1,\n  date = {2021-05}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    assert!(result.output.contains("year = {2021}"));
    assert!(result
        .output
        .contains("__comment1 = \"Original date = {2021-05}\""));
}

#[test]
fn test_output_parses_back() {
    let content = "@article{a1,\n  title = {Round Trip Title},\n  date = {2021-05},\n  month = {5}\n}\n\n@book{b1,\n  title = {Left Alone}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let reparsed = Parser::new()
        .parse_str(&result.output)
        .expect("Output must parse");
    assert_eq!(reparsed.len(), 2);

    let record = reparsed.get("a1").unwrap();
    assert_eq!(record.field("year").unwrap().raw, "2021");
    assert_eq!(record.field("title").unwrap().raw, "Round trip title");
    assert_eq!(record.annotation_count(), 2);
    assert_eq!(
        record.field("__comment1").unwrap().style,
        FieldStyle::Quoted
    );
}

#[test]
fn test_untouched_records_render_identically() {
    let content = "@book{b1,\n  author = {An Author},\n  title = {Exactly As Written},\n  note = \"quoted stays quoted\"\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");
    assert_eq!(result.output, content);
}

// =============================================================================
// Pass Selection Tests
// =============================================================================

#[test]
fn test_dates_only_config() {
    let content = "@article{a1,\n  title = {Messy TITLE Words},\n  date = {2021}\n}\n";
    let file = create_test_file(content);

    let config = CleanerConfig {
        normalizer: NormalizerConfig::dates_only(),
    };
    let result = Cleaner::with_config(config)
        .clean(file.path())
        .expect("Clean failed");

    let record = result.database.get("a1").unwrap();
    assert_eq!(record.field("year").unwrap().raw, "2021");
    assert_eq!(record.field("title").unwrap().raw, "Messy TITLE Words");
}

#[test]
fn test_titles_only_config() {
    let content = "@article{a1,\n  title = {Messy Title Words},\n  date = {2021}\n}\n";
    let file = create_test_file(content);

    let config = CleanerConfig {
        normalizer: NormalizerConfig::titles_only(),
    };
    let result = Cleaner::with_config(config)
        .clean(file.path())
        .expect("Clean failed");

    let record = result.database.get("a1").unwrap();
    assert!(record.has_field("date"));
    assert!(!record.has_field("year"));
    assert_eq!(record.field("title").unwrap().raw, "Messy title words");
}

// =============================================================================
// Failure Mode Tests
// =============================================================================

#[test]
fn test_missing_file_is_io_error() {
    let err = Cleaner::new().clean("does/not/exist.bib").unwrap_err();
    assert!(matches!(err, bibtidy::BibtidyError::Io { .. }));
}

#[test]
fn test_malformed_input_aborts_run() {
    let content = "@article{good1,\n  year = {2000}\n}\n@article{bad1,\n  title = {never closed\n";
    let file = create_test_file(content);

    // Parse failure means nothing is normalized or rendered.
    let err = Cleaner::new().clean(file.path()).unwrap_err();
    assert!(matches!(err, bibtidy::BibtidyError::Parse { .. }));
}

#[test]
fn test_report_round_trip_through_json() {
    let content = "@article{a1,\n  date = {2021-05},\n  title = {Some Title Here}\n}\n";
    let file = create_test_file(content);

    let result = Cleaner::new().clean(file.path()).expect("Clean failed");

    let report_file = NamedTempFile::new().unwrap();
    result.report.save(report_file.path()).unwrap();
    let loaded = bibtidy::NormalizeResult::load(report_file.path()).unwrap();

    assert_eq!(loaded.records_processed, result.report.records_processed);
    assert_eq!(loaded.years_extracted, 1);
    assert_eq!(loaded.changes.len(), result.report.changes.len());
}

// =============================================================================
// Formatter Round Trip
// =============================================================================

#[test]
fn test_render_then_parse_preserves_field_order() {
    let content = "@article{a1,\n  zeta = {1},\n  alpha = {2},\n  middle = {3}\n}\n";
    let db = Parser::new().parse_str(content).unwrap();
    let rendered = Formatter::new().render_all(&db);

    let reparsed = Parser::new().parse_str(&rendered).unwrap();
    let names: Vec<_> = reparsed.records[0]
        .fields()
        .map(|(n, _)| n.to_string())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "middle"]);
}
