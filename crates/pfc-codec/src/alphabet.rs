//! Code alphabet — the ordered symbol set codes are grown from.

use crate::error::{CodecError, Result};

/// Ordered alphabet the code generator prepends symbols from.
///
/// The order is significant: it fixes the emission order within each
/// generation round, and therefore which codes end up shortest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The nucleotide alphabet used when preparing text for sequence tools.
    pub fn dna() -> Self {
        Self {
            symbols: vec!['A', 'C', 'G', 'T'],
        }
    }

    /// Build an alphabet from ordered symbols, dropping repeats.
    /// Fewer than 2 distinct symbols cannot span a prefix-free code space.
    pub fn new(symbols: &[char]) -> Result<Self> {
        let mut distinct: Vec<char> = Vec::with_capacity(symbols.len());
        for &s in symbols {
            if !distinct.contains(&s) {
                distinct.push(s);
            }
        }
        if distinct.len() < 2 {
            return Err(CodecError::DegenerateAlphabet {
                size: distinct.len(),
            });
        }
        Ok(Self { symbols: distinct })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}
