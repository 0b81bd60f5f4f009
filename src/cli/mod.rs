//! Command-line interface for epiya-typer.
//!
//! This module implements the CLI using clap. The tool takes exactly one
//! input mode:
//!
//! - **--seq**: genotype a single sequence passed on the command line
//! - **--file**: genotype every record of a FASTA file (or stdin via `-`)
//!
//! ## Usage
//!
//! ```text
//! # Genotype a single sequence
//! epiya-typer --seq EPIYAQVNKEPIYTQVAKK
//!
//! # Genotype every record in a FASTA file, one line per record
//! epiya-typer --file isolates.fasta
//!
//! # Comma separator for spreadsheet-style output
//! epiya-typer --file isolates.fasta --sep ,
//!
//! # Collapse rare segment tags (B', B'', B''' all appear as B)
//! epiya-typer --file isolates.fasta --norareseg
//!
//! # JSON output with per-hit offsets
//! epiya-typer --seq EPIYAQVNK --format json
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub mod run;

#[derive(Parser)]
#[command(name = "epiya-typer")]
#[command(version)]
#[command(about = "Genotype cagA sequences by scanning for EPIYA motifs")]
#[command(
    long_about = "epiya-typer scans the C-terminal variable region of cagA for EPIYA-family motifs and reports the genotype as a compact string (e.g. ABD, AB', ABCCC).\n\nEach motif occurrence contributes one token: the A/B/C/D type plus a segment tag for rare variants (', '', ''', *). Tokens are concatenated in order of appearance."
)]
#[command(group(ArgGroup::new("input").required(true).args(["seq", "file"])))]
pub struct Cli {
    /// Single cagA sequence as argument
    #[arg(short, long)]
    pub seq: Option<String>,

    /// FASTA file containing one or more cagA sequences, '-' for stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Separator for result output. Using ',' is great for CSV files
    #[arg(long, default_value = "\t")]
    pub sep: String,

    /// Make rare patterns such as B', B'', B''' appear as B
    #[arg(short = 'n', long = "norareseg")]
    pub norareseg: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
