//! Prefix-free nucleotide codec — reversible text → {A,C,G,T} transformation.
//!
//! Turns arbitrary text into a prefix-free code over a fixed 4-symbol
//! alphabet so that nucleotide tooling (sequence aligners) can operate on
//! plain text. Components:
//! 1. Code generator — lazy infinite code stream grown from root codes
//! 2. Prefix-free filter — drops candidates an earlier code prefixes
//! 3. Dictionary builder — shortest codes go to the most frequent symbols
//! 4. Encoder / decoder — greedy earliest-match, strict and tolerant modes

pub mod alphabet;
pub mod codec;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod generator;
pub mod pipeline;

pub use alphabet::Alphabet;
pub use codec::{
    decode, decode_tolerant, decode_tolerant_with, encode, DEFAULT_PASSTHROUGH, UNRESOLVED_MARKER,
};
pub use dictionary::{
    build_dictionary, build_dictionary_with, frequency_table, ranked_symbols, validate_roots,
    Dictionary,
};
pub use error::{CodecError, Result};
pub use filter::{prefix_free, PrefixFree};
pub use generator::CodeStream;
pub use pipeline::{PrefixCodec, TranscodeResult, DEFAULT_ROOTS};
