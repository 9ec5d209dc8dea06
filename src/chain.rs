//! See the top level crate documentation for information about the [`Chain`] type.

use hashbrown::HashMap;

use itertools::Itertools;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;
use crate::continuation::Continuations;
use crate::error::{ChainError, Result};
use crate::select;
use crate::split::split_sentences;
use crate::token::{tokenize, Token, TokenPair, TokenPairRef, TokenRef};

/// Fixed order Markov chain over the words of sentences.
///
/// Every sentence fed to the chain that is long enough leaves behind an opening window (its
/// first `order + 1` words) and one continuation per word following that window. The context
/// key of a continuation is *not* the words right before it; it is the first word of the
/// preceding window paired with the last word of that window. A generated sentence starts from
/// a random opening window and is extended by looking up its last two words, until the chain
/// has nothing to say or the configured length is reached.
///
/// ```
/// # use sentencechain::Chain;
/// # use rand::thread_rng;
/// let mut chain = Chain::new(2).unwrap();
/// chain.add_sentence("the cat sat on the mat");
///
/// assert_eq!(chain.beginnings(), [vec!["the", "cat", "sat"]]);
///
/// // "on" followed the window "the cat sat", so it is keyed by "the" and "sat"
/// assert_eq!(
///     chain.next_word(&mut thread_rng(), &("the", "sat")).map(String::as_str),
///     Some("on")
/// );
///
/// // But never by the two words right before it!
/// assert_eq!(chain.next_word(&mut thread_rng(), &("cat", "sat")), None);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chain {
    config: ChainConfig,
    beginnings: Vec<Vec<Token>>,
    map: HashMap<TokenPair, Continuations>,
}

impl Chain {
    /// Creates an empty chain of the given order, using defaults for everything else.
    ///
    /// # Errors
    ///
    /// [`ChainError::InvalidOrder`] if `order` is zero or too large to build windows with.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_config(ChainConfig::with_order(order))
    }

    /// Creates an empty chain.
    ///
    /// # Errors
    ///
    /// If the configuration does not pass [`ChainConfig::validate()`].
    pub fn with_config(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            beginnings: Vec::new(),
            map: HashMap::new(),
        })
    }

    pub fn order(&self) -> usize {
        self.config.order
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Number of distinct context keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` if no context key has been learned yet. Opening windows may still exist, if only
    /// sentences of exactly `order + 1` words have been fed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Add the occurance of `next` following `prev`.
    pub fn add_occurance(&mut self, prev: TokenPairRef<'_>, next: &str) {
        match self.map.get_mut(&prev) {
            Some(c) => {
                c.push(next);
            }
            None => {
                let seq = self.map.len();
                self.map.insert(TokenPair::from(&prev), Continuations::new(seq, next));
            }
        }
    }

    /// Feeds the chain a single sentence. Returns `false` if the sentence had `order` words or
    /// less, in which case nothing is learned from it.
    ///
    /// The words are from [`tokenize()`](crate::token::tokenize()).
    pub fn add_sentence(&mut self, sentence: &str) -> bool {
        let tokens: Vec<TokenRef> = tokenize(sentence).collect();
        let window = self.config.window_len();

        if tokens.len() < window {
            trace!(
                words = tokens.len(),
                order = self.order(),
                "skipping short sentence"
            );
            return false;
        }

        self.beginnings
            .push(tokens[..window].iter().map(|t| t.to_string()).collect());

        // A full window and the word that came after it
        for w in tokens.windows(window + 1) {
            self.add_occurance((w[0], w[window - 1]), w[window]);
        }

        true
    }

    /// Splits `text` into sentences on the configured terminators and feeds each of them to
    /// [`Chain::add_sentence()`]. Returns how many sentences were long enough to learn from.
    pub fn add_text(&mut self, text: &str) -> usize {
        let sentences = split_sentences(text, &self.config.terminators);
        let learned = sentences
            .iter()
            .filter(|sentence| self.add_sentence(sentence))
            .count();

        debug!(
            sentences = sentences.len(),
            learned,
            keys = self.map.len(),
            beginnings = self.beginnings.len(),
            "fed text"
        );
        learned
    }

    /// Picks a random word that has followed the context key `prev`.
    ///
    /// If the chain has never seen the `prev` tokens as a key, `None` is returned.
    pub fn next_word<'a>(&self, rng: &mut impl Rng, prev: &TokenPairRef<'a>) -> Option<&Token> {
        let continuations = self.map.get(prev)?;
        continuations.get_random_token(rng).ok()
    }

    /// Randomly chooses one of the opening windows.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptyPool`] if no sentence long enough has been fed.
    pub fn random_beginning(&self, rng: &mut impl Rng) -> Result<&[Token]> {
        select::sample(rng, &self.beginnings, "beginnings").map(Vec::as_slice)
    }

    /// Generates the words of a new sentence, without any ending punctuation.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptyPool`] if no sentence long enough has been fed.
    pub fn generate_words(&self, rng: &mut impl Rng) -> Result<Vec<&Token>> {
        let mut words: Vec<&Token> = self.random_beginning(rng)?.iter().collect();
        self.extend(rng, &mut words);
        Ok(words)
    }

    /// Generates a new sentence ending in one of the configured endings.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptyPool`] if no sentence long enough has been fed.
    pub fn generate_sentence(&self, rng: &mut impl Rng) -> Result<String> {
        let mut words: Vec<&Token> = self.random_beginning(rng)?.iter().collect();
        let ending = select::sample(rng, &self.config.endings, "endings")?;
        self.extend(rng, &mut words);

        Ok(format!("{}{ending}", words.iter().join(" ")))
    }

    /// Keeps appending words until the last two are an unknown key, or the sentence is full.
    fn extend<'s>(&'s self, rng: &mut impl Rng, words: &mut Vec<&'s Token>) {
        loop {
            if let Some(max) = self.config.max_words {
                if words.len() >= max {
                    debug!(words = words.len(), "sentence reached max length");
                    return;
                }
            }

            let next = match words.as_slice() {
                [.., left, right] => self.next_word(rng, &(left.as_str(), right.as_str())),
                _ => None,
            };

            match next {
                Some(word) => words.push(word),
                None => {
                    debug!(words = words.len(), "no continuation, ending sentence");
                    return;
                }
            }
        }
    }

    /// A random context key together with its continuations, like `the sat: [on, on, under]`.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptyPool`] if the chain has no context keys.
    pub fn sample_frequencies(&self, rng: &mut impl Rng) -> Result<String> {
        let (key, continuations) = self
            .map
            .iter()
            .choose(rng)
            .ok_or(ChainError::EmptyPool {
                pool: "transitions",
            })?;
        Ok(format!("{key}: [{}]", continuations.iter().join(", ")))
    }

    /// The context key with the most continuations. If several keys are equally long, the one
    /// learned first wins. `None` if the chain is empty.
    pub fn longest_chain(&self) -> Option<(&TokenPair, &Continuations)> {
        self.map.iter().max_by(|(_, a), (_, b)| {
            a.len().cmp(&b.len()).then_with(|| b.seq().cmp(&a.seq()))
        })
    }

    /// Every context key and what has followed it.
    pub fn frequencies(&self) -> &HashMap<TokenPair, Continuations> {
        &self.map
    }

    /// Every opening window, in the order they were fed.
    pub fn beginnings(&self) -> &[Vec<Token>] {
        &self.beginnings
    }

    /// Adds everything `other` has learned to this chain, as if its sentences were fed here
    /// after the ones already fed.
    ///
    /// # Errors
    ///
    /// [`ChainError::OrderMismatch`] if the chains are of different orders.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.order() != other.order() {
            return Err(ChainError::OrderMismatch {
                expected: self.order(),
                found: other.order(),
            });
        }

        self.beginnings.extend(other.beginnings.iter().cloned());

        let mut theirs: Vec<_> = other.map.iter().collect();
        theirs.sort_by_key(|(_, c)| c.seq());
        for (key, continuations) in theirs {
            match self.map.get_mut(key) {
                Some(c) => c.extend_from(continuations),
                None => {
                    let seq = self.map.len();
                    self.map.insert(key.clone(), continuations.with_seq(seq));
                }
            }
        }

        debug!(
            keys = self.map.len(),
            beginnings = self.beginnings.len(),
            "merged chain"
        );
        Ok(())
    }
}
