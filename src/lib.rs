//! # Burrows-Wheeler Full-Text Index
//!
//! *Count, locate and extract without decompressing.*
//!
//! ## Intuition First
//!
//! Imagine shelving every possible rotation of a book's text in sorted
//! order and keeping only the last letter of each rotation. That single
//! column, the Burrows-Wheeler Transform, is a reversible shuffle of
//! the book. Stranger still, it is a *search index*: by walking a
//! pattern backwards through the column you can count every occurrence
//! without ever reopening the book.
//!
//! ## The Problem
//!
//! Substring search usually forces a trade-off:
//! - **Scanning**: zero space overhead, but $O(n)$ per query.
//! - **Suffix trees**: $O(m)$ queries, but $O(n \log n)$ bits of
//!   pointer-heavy overhead.
//!
//! The FM-index family answers in $O(m)$ while storing little more than
//! a compressed copy of the text.
//!
//! ## Historical Context
//!
//! ```text
//! 1994  Burrows-Wheeler  Block-sorting transform for compression
//! 2000  Ferragina-Manzini  The FM-index: BWT as a search index
//! 2003  Grossi           Wavelet trees: rank over arbitrary alphabets
//! 2009  Nong-Zhang-Chan  SA-IS: linear-time suffix array construction
//! 2010  Bowtie/BWA       BWT indexes go mainstream in genome alignment
//! ```
//!
//! Ferragina and Manzini's insight was that the transform preserves the
//! relative order of equal symbols between the first and last matrix
//! columns, so one rank query per pattern symbol suffices to refine the
//! match range. This is the LF mapping.
//!
//! ## Mathematical Formulation
//!
//! For a sequence $S$ of length $N$ over alphabet $\Sigma$ and a
//! terminator strictly smaller than every symbol:
//! - `count(P)`: occurrences of $P$ in $S$, in $O(|P| \log |\Sigma|)$.
//! - `locate(P)`: all start offsets, plus $O(occ)$ suffix-array reads.
//! - `extract(i, j)`: the bytes $S[i..j)$, in $O((j - i) |\Sigma|)$.
//!
//! ## What Could Go Wrong
//!
//! 1. **Off-by-one in half-open ranges**: every structure here indexes
//!    $[0, N+1)$, because the terminator row counts too. A single
//!    inclusive bound silently corrupts results.
//! 2. **Terminator collisions**: the reserved byte must never appear in
//!    the input, or the rotation sort is ambiguous. Construction rejects
//!    such input instead of guessing.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`Bwt`]**: the index; build once, query concurrently.
//! - **[`BitVector`]**: constant-time rank over raw bits.
//! - **[`WaveletTree`]**: rank/access over the transformed column.
//! - **[`FirstColumn`]**: run directory of the sorted column.
//!
//! ```
//! use bwtx::Bwt;
//!
//! let index = Bwt::new(b"banana").unwrap();
//! assert_eq!(index.count(b"ana"), 2);
//!
//! let mut hits = index.locate(b"ana");
//! hits.sort_unstable();
//! assert_eq!(hits, vec![1, 3]);
//!
//! assert_eq!(index.extract(1, 4).unwrap(), b"ana");
//! ```
//!
//! ## References
//!
//! - Burrows, M., & Wheeler, D. (1994). "A block-sorting lossless data
//!   compression algorithm."
//! - Ferragina, P., & Manzini, G. (2000). "Opportunistic data structures
//!   with applications."
//! - Grossi, R., et al. (2003). "High-order entropy-compressed text
//!   indexes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod bwt;
pub mod error;
pub mod first_column;
pub mod suffix;
pub mod wavelet;

pub use bitvec::BitVector;
pub use bwt::{Bwt, TERMINATOR};
pub use error::Error;
pub use first_column::FirstColumn;
pub use wavelet::WaveletTree;
