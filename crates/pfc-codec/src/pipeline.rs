//! Codec front-end — dictionary build + encode with size statistics.

use crate::alphabet::Alphabet;
use crate::codec;
use crate::dictionary::{self, Dictionary};
use crate::error::Result;

/// Default root code set.
pub const DEFAULT_ROOTS: &[&str] = &["AAA", "BAA", "BBB"];

/// Result of one transcode pass with the sizes needed for the
/// compression-ratio estimate.
#[derive(Debug, Clone)]
pub struct TranscodeResult {
    pub output: String,
    pub dictionary: Dictionary,
    pub original_len: usize,
    pub encoded_len: usize,
    pub dictionary_json_len: usize,
}

impl TranscodeResult {
    /// Byte-estimate ratio: the dictionary artifact plus the encoded
    /// stream at eight code symbols per byte, over the original length.
    pub fn estimated_ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        (self.dictionary_json_len + self.encoded_len / 8) as f64 / self.original_len as f64
    }
}

/// Prefix-free codec configured with an alphabet and a root code set.
///
/// The dictionary it builds is an immutable value; it may be reused across
/// any number of encode/decode calls.
#[derive(Debug, Clone)]
pub struct PrefixCodec {
    pub roots: Vec<String>,
    pub alphabet: Alphabet,
    pub strict_roots: bool,
}

impl PrefixCodec {
    pub fn new<S: AsRef<str>>(roots: &[S], alphabet: Alphabet) -> Self {
        Self {
            roots: roots.iter().map(|r| r.as_ref().to_string()).collect(),
            alphabet,
            strict_roots: false,
        }
    }

    /// Default roots over the DNA alphabet.
    pub fn dna() -> Self {
        Self::new(DEFAULT_ROOTS, Alphabet::dna())
    }

    /// Fail on root sets where one root prefixes another instead of
    /// letting the filter deduplicate them.
    pub fn with_strict_roots(mut self, strict: bool) -> Self {
        self.strict_roots = strict;
        self
    }

    pub fn build_dictionary(&self, text: &str) -> Result<Dictionary> {
        if self.strict_roots {
            dictionary::validate_roots(&self.roots)?;
        }
        dictionary::build_dictionary_with(text, &self.roots, &self.alphabet)
    }

    pub fn encode(&self, text: &str, dict: &Dictionary) -> Result<String> {
        codec::encode(text, dict)
    }

    pub fn decode(&self, encoded: &str, dict: &Dictionary) -> Result<String> {
        codec::decode(encoded, dict)
    }

    pub fn decode_tolerant(&self, formatted: &str, dict: &Dictionary) -> String {
        codec::decode_tolerant(formatted, dict)
    }

    /// Build the dictionary for `text`, encode it, and report sizes.
    pub fn transcode(&self, text: &str) -> Result<TranscodeResult> {
        let dictionary = self.build_dictionary(text)?;
        let output = codec::encode(text, &dictionary)?;
        let dictionary_json_len = dictionary.to_json()?.len();
        Ok(TranscodeResult {
            original_len: text.len(),
            encoded_len: output.len(),
            dictionary_json_len,
            output,
            dictionary,
        })
    }
}

impl Default for PrefixCodec {
    fn default() -> Self {
        Self::dna()
    }
}
