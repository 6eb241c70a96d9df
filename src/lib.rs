//! # Bitgram - Layered Grammar Compression for Bilevel Images
//!
//! Compresses a black/white image by flattening its pixels into a `'0'`/`'1'`
//! bit-string and running it through a two-stage codec:
//! 1. **Grammar substitution**: a fixed ten-level table folds recurring bit
//!    and symbol patterns into shorter symbols until a full pass changes
//!    nothing.
//! 2. **Run-length encoding**: runs of identical characters in the symbol
//!    stream collapse to a decimal count plus the character.
//!
//! Decoding reverses both stages, driven by the set of grammar levels that
//! fired during encoding, and a loss metric reports the fraction of
//! mismatched bit positions between original and reconstruction.
//!
//! ## Example
//!
//! ```
//! use bitgram::{GrammarDecoder, GrammarEncoder, GrammarTable};
//!
//! let table = GrammarTable::layered();
//! let encoding = GrammarEncoder::new(&table).encode("0011");
//! assert_eq!(encoding.symbols, "CAD");
//!
//! let decoded = GrammarDecoder::new(&table).decode(&encoding.symbols, &encoding.applied);
//! assert_eq!(decoded, "0011");
//! ```
//!
//! ## Caveats
//!
//! The codec carries two known ambiguities: run-length counts share an
//! alphabet with decimal digits, and multi-character grammar symbols are
//! split by the character-wise run scanner. Both are documented at the
//! affected modules rather than silently redesigned, and the library logs a
//! warning when it detects either.

mod decode;
mod encode;
mod error;
mod grammar;
mod loss;
mod pipeline;
mod raster;
mod rle;

#[cfg(test)]
mod tests;

pub use decode::GrammarDecoder;
pub use encode::{GrammarEncoder, GrammarEncoding};
pub use error::{Error, Result};
pub use grammar::{AppliedLevels, GrammarLevel, GrammarRule, GrammarTable};
pub use loss::loss;
pub use pipeline::{CompressedArtifact, Pipeline, PipelineReport};
pub use raster::{load_bilevel, save_bilevel};
pub use rle::{rle_decode, rle_encode};
