use crate::core::CodonTable;

use std::fmt;

/// Sequence-level quality metrics for an optimized coding sequence.
///
/// All fields are fractions in [0, 1]. Metrics whose denominator would be
/// zero (empty sequence, no wild-type reference) are reported as 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QcMetrics {
    pub cai: f64,
    pub gc_content: f64,
    pub gc3_content: f64,
    pub wt_codon_retention: f64,
    pub nt_identity: f64,
}

impl QcMetrics {
    /// Computes all metrics from the optimized sequence and the optional
    /// wild-type reference.
    pub fn compute(opt: &[u8], wt_cds: Option<&[u8]>, table: &CodonTable) -> Self {
        QcMetrics {
            cai: cai(opt, table),
            gc_content: gc_content(opt),
            gc3_content: gc3_content(opt),
            wt_codon_retention: wt_codon_retention(opt, wt_cds),
            nt_identity: nt_identity(opt, wt_cds),
        }
    }
}

impl fmt::Display for QcMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# QC Metrics\nCAI: {:.3}\nGC Content: {:.3}%\nGC3 Content: {:.3}%\nWT Codon Retention: {:.3}%\nNT Identity to WT: {:.3}%",
            self.cai,
            self.gc_content * 100.0,
            self.gc3_content * 100.0,
            self.wt_codon_retention * 100.0,
            self.nt_identity * 100.0,
        )
    }
}

/// Fraction of complete codons present in the table's value set.
fn cai(opt: &[u8], table: &CodonTable) -> f64 {
    let codons = opt.len() / 3;
    if codons == 0 {
        return 0.0;
    }

    let hits = opt.chunks_exact(3).filter(|c| table.contains(c)).count();

    hits as f64 / codons as f64
}

/// Fraction of G/C bases over the whole sequence.
fn gc_content(opt: &[u8]) -> f64 {
    if opt.is_empty() {
        return 0.0;
    }

    let gc = opt.iter().filter(|&&b| matches!(b, b'G' | b'C')).count();

    gc as f64 / opt.len() as f64
}

/// Fraction of complete codons whose third base is G or C.
fn gc3_content(opt: &[u8]) -> f64 {
    let codons = opt.len() / 3;
    if codons == 0 {
        return 0.0;
    }

    let gc3 = opt
        .chunks_exact(3)
        .filter(|c| matches!(c[2], b'G' | b'C'))
        .count();

    gc3 as f64 / codons as f64
}

/// Fraction of common codon positions where both sequences carry the same
/// codon. Explicit 0.0 without a wild-type or without common codons.
fn wt_codon_retention(opt: &[u8], wt_cds: Option<&[u8]>) -> f64 {
    let Some(wt) = wt_cds else {
        return 0.0;
    };

    let codons = opt.len().min(wt.len()) / 3;
    if codons == 0 {
        return 0.0;
    }

    let retained = (0..codons)
        .filter(|&i| opt[i * 3..i * 3 + 3] == wt[i * 3..i * 3 + 3])
        .count();

    retained as f64 / codons as f64
}

/// Fraction of common nucleotide positions that match exactly. Explicit 0.0
/// without a wild-type or without common positions.
fn nt_identity(opt: &[u8], wt_cds: Option<&[u8]>) -> f64 {
    let Some(wt) = wt_cds else {
        return 0.0;
    };

    let common = opt.len().min(wt.len());
    if common == 0 {
        return 0.0;
    }

    let matches = opt.iter().zip(wt.iter()).filter(|(a, b)| a == b).count();

    matches as f64 / common as f64
}
