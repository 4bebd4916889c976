//! Code generator — lazy infinite stream of candidate codes.

use crate::alphabet::Alphabet;
use std::collections::VecDeque;

/// Unbounded stream of candidate code strings grown from a root set.
///
/// Round 0 emits the roots in the given order. Each later round takes the
/// previous round's strings and emits, for each string x in production
/// order, `s + x` for every alphabet symbol s in alphabet order. Lengths
/// grow by one symbol per round; the stream never terminates for a
/// non-empty root set. Duplicates are not filtered here.
#[derive(Debug, Clone)]
pub struct CodeStream {
    symbols: Vec<char>,
    queue: VecDeque<String>,
    round: Vec<String>,
}

impl CodeStream {
    pub fn new<S: AsRef<str>>(roots: &[S], alphabet: &Alphabet) -> Self {
        let round: Vec<String> = roots.iter().map(|r| r.as_ref().to_string()).collect();
        Self {
            symbols: alphabet.symbols().to_vec(),
            queue: round.iter().cloned().collect(),
            round,
        }
    }
}

impl Iterator for CodeStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.queue.is_empty() {
            // An empty root set generates nothing at all.
            if self.round.is_empty() {
                return None;
            }
            let mut next_round = Vec::with_capacity(self.round.len() * self.symbols.len());
            for x in &self.round {
                for &s in &self.symbols {
                    let mut code = String::with_capacity(x.len() + s.len_utf8());
                    code.push(s);
                    code.push_str(x);
                    next_round.push(code);
                }
            }
            self.queue.extend(next_round.iter().cloned());
            self.round = next_round;
        }
        self.queue.pop_front()
    }
}
