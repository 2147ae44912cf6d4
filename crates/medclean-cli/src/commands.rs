use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use medclean_core::{CleanContext, run_pipeline, symptom_term_frequencies};
use medclean_ingest::{read_record_table, records_from_table, validate_schema, write_cleaned_csv};
use medclean_model::{Lexicon, LexiconFile};

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_lexicon() -> Result<()> {
    let lexicon = Lexicon::clinical();

    let mut abbreviations = Table::new();
    abbreviations.set_header(vec!["Abbreviation", "Expansion"]);
    apply_table_style(&mut abbreviations);
    for (short, long) in lexicon.abbreviations() {
        abbreviations.add_row(vec![short, long]);
    }
    println!("Abbreviations:");
    println!("{abbreviations}");

    let mut crosswalk = Table::new();
    crosswalk.set_header(vec!["Doctor", "Diagnosis Code"]);
    apply_table_style(&mut crosswalk);
    for (doctor, code) in lexicon.crosswalk_entries() {
        crosswalk.add_row(vec![doctor, code]);
    }
    println!();
    println!("Doctor/diagnosis crosswalk:");
    println!("{crosswalk}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let clean_span = info_span!("clean", input = %args.input.display());
    let _clean_guard = clean_span.enter();
    let clean_start = Instant::now();

    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let current_year = args.year.unwrap_or_else(|| Local::now().year());
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });

    // =========================================================================
    // Ingest: read, validate schema, convert to records
    // =========================================================================
    let table = read_record_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let index = validate_schema(&table)
        .with_context(|| format!("validate schema of {}", args.input.display()))?;
    let records = records_from_table(&table, index);
    debug!(
        record_count = records.len(),
        column_count = table.headers.len(),
        "input converted"
    );

    // =========================================================================
    // Clean: run the pipeline
    // =========================================================================
    let ctx = CleanContext::new(&lexicon, current_year);
    let outcome = run_pipeline(records, &ctx).context("run cleaning pipeline")?;
    let top_symptoms = symptom_term_frequencies(&outcome.records, args.top_symptoms);

    // =========================================================================
    // Output: cleaned dataset and summary report
    // =========================================================================
    let (cleaned_path, report_path) = if args.dry_run {
        info!("output skipped (dry run)");
        (None, None)
    } else {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create {}", output_dir.display()))?;
        let cleaned_path = output_dir.join("cleaned.csv");
        write_cleaned_csv(&cleaned_path, &outcome.records)
            .with_context(|| format!("write {}", cleaned_path.display()))?;
        let report_path = output_dir.join("summary.json");
        let json =
            serde_json::to_string_pretty(&outcome.report).context("serialize summary report")?;
        fs::write(&report_path, json)
            .with_context(|| format!("write {}", report_path.display()))?;
        (Some(cleaned_path), Some(report_path))
    };

    info!(
        output_records = outcome.records.len(),
        duration_ms = clean_start.elapsed().as_millis(),
        "clean command complete"
    );

    Ok(CleanResult {
        input: args.input.clone(),
        output_dir,
        cleaned_path,
        report_path,
        report: outcome.report,
        output_records: outcome.records.len(),
        top_symptoms,
    })
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    let Some(path) = path else {
        return Ok(Lexicon::clinical());
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("read lexicon {}", path.display()))?;
    let file: LexiconFile = serde_json::from_str(&contents)
        .with_context(|| format!("parse lexicon {}", path.display()))?;
    debug!(
        abbreviations = file.abbreviations.len(),
        crosswalk = file.crosswalk.len(),
        "substitute lexicon loaded"
    );
    Ok(Lexicon::from_file(file))
}
