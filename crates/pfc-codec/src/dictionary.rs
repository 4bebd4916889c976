//! Translation dictionary — frequency-ranked symbol → code mapping.

use crate::alphabet::Alphabet;
use crate::error::{CodecError, Result};
use crate::filter::prefix_free;
use crate::generator::CodeStream;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Raw-stream candidates examined per needed code before the draw is
/// declared stuck. Generous: well-formed root sets accept candidates at a
/// high rate, but a root set covering the whole alphabet never yields more
/// than its own codes and must not hang the build.
const DRAW_BUDGET_PER_CODE: usize = 256;

/// Bijective mapping from input symbols to prefix-free codes.
///
/// Built once per encoding session and immutable afterwards; required on
/// both sides of the transformation, so it serializes as a flat JSON
/// object with length-1 string keys (the canonical artifact form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<char, String>,
}

impl Dictionary {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.entries.get(&symbol).map(|c| c.as_str())
    }

    /// Derive the code → symbol view used by the decoder. Lossless because
    /// the dictionary is a bijection.
    pub fn inverse(&self) -> HashMap<&str, char> {
        self.entries
            .iter()
            .map(|(&sym, code)| (code.as_str(), sym))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&char, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Count occurrences of each distinct symbol in `text`.
pub fn frequency_table(text: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for ch in text.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// Distinct symbols ordered for code assignment: frequency descending,
/// symbol value descending as tiebreak. The tiebreak makes dictionary
/// construction reproducible under equal frequencies.
pub fn ranked_symbols(freq: &HashMap<char, usize>) -> Vec<char> {
    let mut symbols: Vec<char> = freq.keys().copied().collect();
    symbols.sort_by(|a, b| (freq[b], *b).cmp(&(freq[a], *a)));
    symbols
}

/// Reject root sets where one root is a prefix of another distinct root.
/// The prefix-free filter would silently drop the longer root; strict
/// callers prefer to hear about it.
pub fn validate_roots<S: AsRef<str>>(roots: &[S]) -> Result<()> {
    if roots.is_empty() {
        return Err(CodecError::AmbiguousRootSet("empty root code set".into()));
    }
    for (i, a) in roots.iter().enumerate() {
        for (j, b) in roots.iter().enumerate() {
            if i != j && b.as_ref().starts_with(a.as_ref()) {
                return Err(CodecError::AmbiguousRootSet(format!(
                    "root {:?} is a prefix of root {:?}",
                    a.as_ref(),
                    b.as_ref()
                )));
            }
        }
    }
    Ok(())
}

/// Build a translation dictionary over the default DNA alphabet.
pub fn build_dictionary<S: AsRef<str>>(text: &str, roots: &[S]) -> Result<Dictionary> {
    build_dictionary_with(text, roots, &Alphabet::dna())
}

/// Build a translation dictionary: draw as many prefix-free codes as the
/// text has distinct symbols, sort them by length ascending (stable), and
/// pair them with the frequency-ranked symbols so the most frequent symbol
/// gets the shortest code.
pub fn build_dictionary_with<S: AsRef<str>>(
    text: &str,
    roots: &[S],
    alphabet: &Alphabet,
) -> Result<Dictionary> {
    if roots.is_empty() {
        return Err(CodecError::AmbiguousRootSet("empty root code set".into()));
    }
    let freq = frequency_table(text);
    let distinct = freq.len();
    if distinct == 0 {
        return Ok(Dictionary::default());
    }

    let budget = roots.len() + distinct * alphabet.len() * DRAW_BUDGET_PER_CODE;
    let mut codes: Vec<String> = prefix_free(CodeStream::new(roots, alphabet).take(budget))
        .take(distinct)
        .collect();
    if codes.len() < distinct {
        return Err(CodecError::AmbiguousRootSet(format!(
            "root set produced only {} prefix-free codes, {} needed",
            codes.len(),
            distinct
        )));
    }
    codes.sort_by_key(|c| c.chars().count());

    let symbols = ranked_symbols(&freq);
    debug!(
        distinct,
        longest = codes.last().map(|c| c.len()).unwrap_or(0),
        "built translation dictionary"
    );
    Ok(Dictionary {
        entries: symbols.into_iter().zip(codes).collect(),
    })
}
