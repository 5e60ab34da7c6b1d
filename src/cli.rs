//! mutation-only codon optimization with QC metrics
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This tool converts a designed amino-acid sequence into a DNA coding
//! sequence for a host organism, reusing wild-type codons where they are
//! already valid, and reports mutation diffs and sequence-level QC metrics.

use clap::{ArgAction, Parser, ValueEnum};
use log::Level;

use std::{fmt, path::PathBuf, str::FromStr};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Designed amino-acid sequence, literal or @file
    #[arg(long)]
    pub aa: String,

    /// Wild-type coding sequence, literal or @file
    #[arg(long = "wt-cds")]
    pub wt_cds: Option<String>,

    /// Host organism selecting the codon table
    #[arg(long, value_enum, default_value = "ecoli_k12")]
    pub host: Host,

    /// Write the optimized sequence as FASTA
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Write the mutation report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the QC summary to stdout
    #[arg(long, default_value = "false", action = ArgAction::SetTrue)]
    pub qc: bool,

    /// Write the QC summary to a file
    #[arg(long = "qc-report")]
    pub qc_report: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Arguments
///
/// - `f`: The formatter to write to
///
/// # Example
///
/// ```rust,ignore
/// use stitch::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aa={}, wt_cds={}, host={:?}, out={}, report={}, qc={}, qc_report={}, level={}",
            self.aa,
            self.wt_cds.as_deref().unwrap_or("-"),
            self.host,
            self.out
                .as_deref()
                .map_or("-".to_string(), |p| p.display().to_string()),
            self.report
                .as_deref()
                .map_or("-".to_string(), |p| p.display().to_string()),
            self.qc,
            self.qc_report
                .as_deref()
                .map_or("-".to_string(), |p| p.display().to_string()),
            self.level,
        )
    }
}

/// Represents the host organism whose codon table drives optimization.
///
/// # Variants
///
/// - `EcoliK12`: Escherichia coli K-12 preferred codons
///
/// # Example
///
/// ```rust,ignore
/// use stitch::Host;
/// use std::str::FromStr;
///
/// let host = Host::from_str("ecoli_k12").unwrap();
/// assert_eq!(host, Host::EcoliK12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Host {
    #[default]
    #[value(name = "ecoli_k12")]
    EcoliK12,
}

/// Parses a string into a Host variant.
///
/// # Arguments
///
/// - `s`: The string to parse ("ecoli_k12")
///
/// # Example
///
/// ```rust,ignore
/// use stitch::Host;
/// use std::str::FromStr;
///
/// let host = Host::from_str("ecoli_k12");
/// assert_eq!(host, Ok(Host::EcoliK12));
///
/// let invalid = Host::from_str("invalid");
/// assert!(invalid.is_err());
/// ```
impl FromStr for Host {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecoli_k12" => Ok(Host::EcoliK12),
            _ => Err(format!("ERROR: Invalid host: {}", s)),
        }
    }
}
