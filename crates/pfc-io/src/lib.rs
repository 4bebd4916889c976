//! File and tool plumbing around the prefix-free codec.
//!
//! Everything the codec core treats as an external collaborator lives
//! here: persisting the dictionary JSON artifact, framing encoded streams
//! as labeled records for sequence tools, and invoking an external
//! aligner over those records.

pub mod align;
pub mod dict_store;
pub mod error;
pub mod records;

pub use align::Aligner;
pub use error::{IoError, Result};
pub use records::{decode_records, encode_lines, parse_records, write_records, Record};
