use crate::{
    cli::{Args, Host},
    consts::{ECOLI_K12_TABLE, UNKNOWN_CODON},
    qc::QcMetrics,
};

use log::info;
use thiserror::Error;

use std::{
    collections::{HashMap, HashSet},
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Error type for input resolution and output writing failures.
#[derive(Error, Debug)]
pub enum StitchError {
    #[error("cannot open input {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file {} has no usable line", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Immutable per-host codon table resolved once at startup.
///
/// Maps each amino-acid symbol to its single preferred codon and keeps the
/// set of all preferred codons for membership tests (wild-type reuse, CAI).
pub struct CodonTable {
    canonical: HashMap<u8, &'static [u8]>,
    values: HashSet<&'static [u8]>,
}

impl CodonTable {
    /// Builds the codon table for the selected host organism.
    pub fn for_host(host: Host) -> Self {
        let entries: &[(u8, &'static [u8])] = match host {
            Host::EcoliK12 => &ECOLI_K12_TABLE,
        };

        let canonical: HashMap<u8, &'static [u8]> = entries.iter().copied().collect();
        let values: HashSet<&'static [u8]> = entries.iter().map(|(_, codon)| *codon).collect();

        CodonTable { canonical, values }
    }

    /// Returns the preferred codon for an amino acid, if the table knows it.
    pub fn lookup(&self, aa: u8) -> Option<&'static [u8]> {
        self.canonical.get(&aa).copied()
    }

    /// Checks membership of a codon in the table's value set, regardless of
    /// which amino acid it encodes.
    pub fn contains(&self, codon: &[u8]) -> bool {
        self.values.contains(codon)
    }
}

/// A codon replacement relative to the wild-type sequence.
///
/// Positions are 1-based. Recorded only when the chosen codon differs from
/// the wild-type codon at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub position: usize,
    pub aa: u8,
    pub original: [u8; 3],
    pub replacement: [u8; 3],
}

impl Mutation {
    fn new(position: usize, aa: u8, original: &[u8], replacement: &[u8]) -> Self {
        let mut from = [0u8; 3];
        let mut to = [0u8; 3];
        from.copy_from_slice(original);
        to.copy_from_slice(replacement);

        Mutation {
            position,
            aa,
            original: from,
            replacement: to,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {} → {}",
            self.aa as char,
            self.position,
            String::from_utf8_lossy(&self.original),
            String::from_utf8_lossy(&self.replacement),
        )
    }
}

/// Main processing function that orchestrates codon optimization.
pub fn stitch(args: Args) -> Result<(), StitchError> {
    let Args {
        aa,
        wt_cds,
        host,
        out,
        report,
        qc,
        qc_report,
        ..
    } = args;

    let aa_seq = resolve_input(&aa)?;
    let wt_cds = wt_cds.as_deref().map(resolve_input).transpose()?;
    let table = CodonTable::for_host(host);

    let (opt, mutations) = assign_codons(
        aa_seq.as_bytes(),
        wt_cds.as_deref().map(str::as_bytes),
        &table,
    );

    info!(
        "Optimized {} residues into {} nt with {} mutations",
        aa_seq.len(),
        opt.len(),
        mutations.len()
    );

    if let Some(path) = out {
        write_fasta(&path, &opt)?;
        info!("Wrote optimized FASTA to {}", path.display());
    }

    if let Some(path) = report {
        write_report(&path, &mutations)?;
        info!("Wrote mutation report to {}", path.display());
    }

    if qc || qc_report.is_some() {
        let metrics = QcMetrics::compute(&opt, wt_cds.as_deref().map(str::as_bytes), &table);

        if qc {
            println!("{}", metrics);
        }

        if let Some(path) = qc_report {
            std::fs::write(&path, metrics.to_string())?;
            info!("Wrote QC report to {}", path.display());
        }
    }

    Ok(())
}

/// Resolves a CLI token into sequence content.
///
/// Tokens starting with `@` name a file whose last non-empty line is taken;
/// anything else is returned literally with surrounding whitespace stripped.
///
/// # Arguments
///
/// - `token`: The raw CLI value, literal sequence or `@path`
///
/// # Example
///
/// ```rust,ignore
/// use stitch::core::resolve_input;
///
/// let seq = resolve_input(" MKT ").unwrap();
/// assert_eq!(seq, "MKT");
/// ```
pub fn resolve_input(token: &str) -> Result<String, StitchError> {
    let Some(path) = token.strip_prefix('@') else {
        return Ok(token.trim().to_string());
    };

    let path = PathBuf::from(path);
    let content = std::fs::read_to_string(&path).map_err(|source| StitchError::InputNotFound {
        path: path.clone(),
        source,
    })?;

    content
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or(StitchError::EmptyInput { path })
}

/// Assigns one codon per amino-acid position in a single forward pass.
///
/// Each position takes the host's preferred codon unless the wild-type
/// sequence already carries a codon present in the table's value set at
/// that position, in which case the wild-type codon is kept. A mutation is
/// recorded for every position where the emitted codon differs from a
/// defined wild-type codon.
pub fn assign_codons(
    aa_seq: &[u8],
    wt_cds: Option<&[u8]>,
    table: &CodonTable,
) -> (Vec<u8>, Vec<Mutation>) {
    let mut opt = Vec::with_capacity(aa_seq.len() * 3);
    let mut mutations = Vec::new();

    for (i, &aa) in aa_seq.iter().enumerate() {
        let canonical = table.lookup(aa);
        let wt_codon = wt_cds.and_then(|wt| wt.get(i * 3..i * 3 + 3));

        // Wild-type reuse only applies to residues the table knows; unknown
        // residues always emit the sentinel.
        let chosen = match (canonical, wt_codon) {
            (Some(canon), Some(wt)) if table.contains(wt) && canon != wt => wt,
            (Some(canon), _) => canon,
            (None, _) => UNKNOWN_CODON,
        };

        if let Some(wt) = wt_codon {
            if chosen != wt {
                mutations.push(Mutation::new(i + 1, aa, wt, chosen));
            }
        }

        opt.extend_from_slice(chosen);
    }

    (opt, mutations)
}

/// Writes the optimized sequence as a single-record FASTA file.
fn write_fasta(path: &Path, seq: &[u8]) -> Result<(), StitchError> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(b">opt\n")?;
    writer.write_all(seq)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Writes the mutation report, one line per mutation.
///
/// An empty report still produces a file containing a single newline.
fn write_report(path: &Path, mutations: &[Mutation]) -> Result<(), StitchError> {
    let mut writer = BufWriter::new(File::create(path)?);

    let lines = mutations
        .iter()
        .map(Mutation::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    writer.write_all(lines.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
