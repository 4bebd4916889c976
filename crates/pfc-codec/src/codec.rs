//! Encoder and decoder over a translation dictionary.

use crate::dictionary::Dictionary;
use crate::error::{CodecError, Result};

/// Characters the tolerant decoder emits verbatim by default: line breaks
/// and the alignment gap marker external tools insert.
pub const DEFAULT_PASSTHROUGH: &[char] = &['\n', '-'];

/// Prefix the tolerant decoder puts before an unresolvable trailing
/// accumulator instead of failing.
pub const UNRESOLVED_MARKER: &str = "***";

/// Replace every symbol of `text` with its code, concatenated with no
/// separators. Reversibility relies entirely on the codes being
/// pairwise prefix-free.
pub fn encode(text: &str, dict: &Dictionary) -> Result<String> {
    let mut out = String::with_capacity(text.len() * 3);
    for symbol in text.chars() {
        match dict.code_for(symbol) {
            Some(code) => out.push_str(code),
            None => return Err(CodecError::UnmappedSymbol { symbol }),
        }
    }
    Ok(out)
}

/// Strict greedy earliest-match decode.
///
/// Grows an accumulator one character at a time; whenever it equals a
/// complete code the symbol is emitted and the accumulator resets before
/// the next character is consumed. Prefix-freedom guarantees no later,
/// different parse can exist, so no backtracking is ever needed. The
/// trailing accumulator must itself resolve or decoding fails.
pub fn decode(encoded: &str, dict: &Dictionary) -> Result<String> {
    if encoded.is_empty() {
        return Ok(String::new());
    }
    let inverse = dict.inverse();
    let mut out = String::new();
    let mut word = String::new();
    for ch in encoded.chars() {
        if let Some(&symbol) = inverse.get(word.as_str()) {
            out.push(symbol);
            word.clear();
        }
        word.push(ch);
    }
    match inverse.get(word.as_str()) {
        Some(&symbol) => {
            out.push(symbol);
            Ok(out)
        }
        None => Err(CodecError::IncompleteCode { residual: word }),
    }
}

/// Tolerant decode with the default pass-through set.
pub fn decode_tolerant(formatted: &str, dict: &Dictionary) -> String {
    decode_tolerant_with(formatted, dict, DEFAULT_PASSTHROUGH)
}

/// Greedy decode of a stream that has been reformatted by an external
/// tool. Pass-through characters are emitted verbatim without touching
/// the accumulator; everything else is uppercased before accumulation
/// (aligners downcase sequences). An unresolvable trailing accumulator is
/// emitted as a marked token rather than an error — this mode never fails.
pub fn decode_tolerant_with(formatted: &str, dict: &Dictionary, passthrough: &[char]) -> String {
    let inverse = dict.inverse();
    let mut out = String::new();
    let mut word = String::new();
    for ch in formatted.chars() {
        if passthrough.contains(&ch) {
            out.push(ch);
            continue;
        }
        if let Some(&symbol) = inverse.get(word.as_str()) {
            out.push(symbol);
            word.clear();
        }
        word.push(ch.to_ascii_uppercase());
    }
    if word.is_empty() {
        return out;
    }
    match inverse.get(word.as_str()) {
        Some(&symbol) => out.push(symbol),
        None => {
            out.push_str(UNRESOLVED_MARKER);
            out.push_str(&word);
        }
    }
    out
}
