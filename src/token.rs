//! At the heart of a [`Chain`](crate::Chain) is a [`Token`]. In fact, this is just a String. But we
//! make a distinction here: A Token is a single word of a sentence, as produced by [`tokenize()`].
//! That is, anything between two runs of whitespace, except a lone `'`.
//!
//! Two tokens make up a [`TokenPair`], which is the context key the chain looks up continuations
//! with.

use std::fmt;

use hashbrown::Equivalent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Representation of a single word.
pub type Token = String;

/// An owned pair of [`Token`]s, used as a context key.
///
/// When displayed, the pair is the two words joined by a single space:
///
/// ```
/// # use sentencechain::TokenPair;
/// let tp = TokenPair::from(&("the", "sat"));
/// assert_eq!(tp.to_string(), "the sat");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenPair(pub Token, pub Token);

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// A borrowed version of [`TokenPair`] that does not own its pair. Like [`TokenRef`] to [`Token`].
pub type TokenPairRef<'a> = (TokenRef<'a>, TokenRef<'a>);

impl<'a> From<&TokenPairRef<'a>> for TokenPair {
    fn from(value: &TokenPairRef) -> Self {
        Self(value.0.to_string(), value.1.to_string())
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl PartialEq<(&str, &str)> for TokenPair {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.0 == *other.0 && self.1 == *other.1
    }
}

impl Equivalent<TokenPair> for (&str, &str) {
    fn equivalent(&self, key: &TokenPair) -> bool {
        key.eq(self)
    }
}

/// Splits a sentence into words on whitespace.
///
/// Lone apostrophes are dropped; they are what is left of quotes like `'hello'` after the text
/// has been split on punctuation.
pub fn tokenize(sentence: &str) -> impl Iterator<Item = TokenRef<'_>> {
    sentence
        .split_whitespace()
        .filter(|token| !token.is_empty() && *token != "'")
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::*;

    #[test]
    fn tokenize_drops_lone_apostrophes() {
        let tokens: Vec<_> = tokenize(" ' the  cat's\thome '\n").collect();
        assert_eq!(tokens, vec!["the", "cat's", "home"]);
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize("   ").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn borrowed_lookup() {
        let mut map = HashMap::new();
        map.insert(TokenPair::from(&("cat", "on")), 1);
        assert_eq!(map.get(&("cat", "on")), Some(&1));
        assert_eq!(map.get(&("on", "cat")), None);
    }
}
