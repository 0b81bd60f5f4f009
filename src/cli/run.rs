//! Execution of the two input modes.
//!
//! Single-sequence mode prints the genotype string alone; batch mode prints
//! one `<id><sep><genotype>` line per FASTA record. JSON output additionally
//! reports every hit with its offset.

use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::core::motif::{MotifHit, SegmentTag, TypeLabel};
use crate::parsing::fasta;
use crate::scanning;

/// One classified occurrence, as reported in JSON output
#[derive(Serialize)]
struct HitReport {
    offset: usize,
    tag: SegmentTag,
    label: TypeLabel,
    token: String,
}

/// Scan result for one sequence, as reported in JSON output
#[derive(Serialize)]
struct RecordReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    genotype: String,
    hits: Vec<HitReport>,
}

impl RecordReport {
    fn new(id: Option<String>, hits: &[MotifHit], collapse: bool) -> Self {
        Self {
            id,
            genotype: hits.iter().map(|h| h.token(collapse)).collect(),
            hits: hits
                .iter()
                .map(|h| HitReport {
                    offset: h.offset,
                    tag: h.tag,
                    label: h.label,
                    token: h.token(collapse),
                })
                .collect(),
        }
    }
}

/// Execute the CLI
///
/// # Errors
///
/// Returns an error if the FASTA input cannot be read or parsed.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(seq) = &cli.seq {
        return run_single(seq, cli);
    }

    // clap's input group guarantees exactly one mode is present
    let path = cli
        .file
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("either --seq or --file is required"))?;

    let records = fasta::read_records(path)?;
    if cli.verbose {
        eprintln!("Read {} records from {}", records.len(), path.display());
    }

    match cli.format {
        OutputFormat::Text => {
            for record in &records {
                let genotype = scanning::scan(&record.sequence, cli.norareseg);
                debug!(id = %record.id, %genotype, "scanned record");
                println!("{}{}{}", record.id, cli.sep, genotype);
            }
        }
        OutputFormat::Json => {
            let reports: Vec<RecordReport> = records
                .iter()
                .map(|record| {
                    let hits = scanning::find_motifs(&record.sequence);
                    RecordReport::new(Some(record.id.clone()), &hits, cli.norareseg)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

fn run_single(seq: &str, cli: &Cli) -> anyhow::Result<()> {
    let hits = scanning::find_motifs(seq);
    if cli.verbose {
        eprintln!("Found {} motif occurrences in {} residues", hits.len(), seq.len());
    }

    match cli.format {
        OutputFormat::Text => {
            let genotype: String = hits.iter().map(|h| h.token(cli.norareseg)).collect();
            println!("{genotype}");
        }
        OutputFormat::Json => {
            let report = RecordReport::new(None, &hits, cli.norareseg);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
