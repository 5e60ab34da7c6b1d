//! mutation-only codon optimization with QC metrics
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This tool converts a designed amino-acid sequence into a DNA coding
//! sequence for a host organism, reusing wild-type codons where they are
//! already valid, and reports mutation diffs and sequence-level QC metrics.
//!
//! # Usage
//!
//! ```bash
//! Usage: stitch [OPTIONS] --aa <AA>
//!
//! Options:
//!       --aa <AA>                Designed amino-acid sequence, literal or @file
//!       --wt-cds <WT_CDS>        Wild-type coding sequence, literal or @file
//!       --host <HOST>            Host organism selecting the codon table [default: ecoli_k12] [possible values: ecoli_k12]
//!   -o, --out <OUT>              Write the optimized sequence as FASTA
//!       --report <REPORT>        Write the mutation report
//!       --qc                     Print the QC summary to stdout
//!       --qc-report <QC_REPORT>  Write the QC summary to a file
//!   -L, --level <LEVEL>          Logging verbosity level [default: info] [possible values: trace, debug, info, warn, error]
//!   -h, --help                   Print help
//!   -V, --version                Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod qc;

pub use cli::{Args, Host};
pub use core::{stitch, CodonTable, Mutation, StitchError};
pub use qc::QcMetrics;
