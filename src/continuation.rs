//! [`Continuations`] are the words that have been seen following a
//! [`TokenPair`](crate::token::TokenPair) in a [`Chain`](crate::Chain).

use std::ops::Deref;

use itertools::Itertools;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::select;
use crate::token::Token;

/// Every word observed after a context key, in the order they were observed.
///
/// Duplicates are kept, one entry per observation, so a uniform pick over the list is weighted
/// by how common each word is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Continuations {
    /// The actual choices
    tokens: Vec<Token>,
    /// When the key owning this list was first seen, relative to other keys of the same chain.
    seq: usize,
}

impl Continuations {
    /// Creates a list holding a single observation. There is no way to create an empty one.
    pub(crate) fn new(seq: usize, token: &str) -> Self {
        Self {
            tokens: vec![token.to_string()],
            seq,
        }
    }

    pub(crate) fn with_seq(&self, seq: usize) -> Self {
        Self {
            tokens: self.tokens.clone(),
            seq,
        }
    }

    /// Add an occurance of this token.
    pub(crate) fn push(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    pub(crate) fn extend_from(&mut self, other: &Self) {
        self.tokens.extend_from_slice(&other.tokens);
    }

    pub(crate) fn seq(&self) -> usize {
        self.seq
    }

    pub fn get_random_token(&self, rng: &mut impl Rng) -> Result<&Token> {
        select::sample(rng, &self.tokens, "continuations")
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct words and how many times each was seen, in order of first observation.
    pub fn counts(&self) -> Vec<(&Token, usize)> {
        let counts = self.tokens.iter().counts();
        self.tokens
            .iter()
            .unique()
            .map(|t| (t, counts[t]))
            .collect()
    }
}

impl Deref for Continuations {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_duplicates_in_order() {
        let mut c = Continuations::new(0, "on");
        c.push("under");
        c.push("on");
        assert_eq!(c.as_slice(), ["on", "under", "on"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn counts_in_first_seen_order() {
        let mut c = Continuations::new(0, "b");
        c.push("a");
        c.push("b");
        c.push("b");
        let counts: Vec<_> = c.counts().into_iter().map(|(t, n)| (t.as_str(), n)).collect();
        assert_eq!(counts, vec![("b", 3), ("a", 1)]);
    }
}
