//! mutation-only codon optimization with QC metrics
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This tool converts a designed amino-acid sequence into a DNA coding
//! sequence for a host organism, reusing wild-type codons where they are
//! already valid, and reports mutation diffs and sequence-level QC metrics.

/// Sentinel codon emitted for amino acids absent from the host table.
pub const UNKNOWN_CODON: &[u8] = b"NNN";

/// One preferred codon per amino-acid symbol for E. coli K-12.
pub const ECOLI_K12_TABLE: [(u8, &[u8]); 21] = [
    // Alanine (A)
    (b'A', b"GCT"),
    // Arginine (R)
    (b'R', b"CGT"),
    // Asparagine (N)
    (b'N', b"AAT"),
    // Aspartic acid (D)
    (b'D', b"GAT"),
    // Cysteine (C)
    (b'C', b"TGT"),
    // Glutamine (Q)
    (b'Q', b"CAA"),
    // Glutamic acid (E)
    (b'E', b"GAA"),
    // Glycine (G)
    (b'G', b"GGT"),
    // Histidine (H)
    (b'H', b"CAT"),
    // Isoleucine (I)
    (b'I', b"ATT"),
    // Leucine (L)
    (b'L', b"CTG"),
    // Lysine (K)
    (b'K', b"AAA"),
    // Methionine (M) - Start codon
    (b'M', b"ATG"),
    // Phenylalanine (F)
    (b'F', b"TTT"),
    // Proline (P)
    (b'P', b"CCG"),
    // Serine (S)
    (b'S', b"AGC"),
    // Threonine (T)
    (b'T', b"ACC"),
    // Tryptophan (W)
    (b'W', b"TGG"),
    // Tyrosine (Y)
    (b'Y', b"TAT"),
    // Valine (V)
    (b'V', b"GTG"),
    // Stop (*)
    (b'*', b"TAA"),
];
