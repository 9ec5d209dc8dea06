//! Settings a [`Chain`](crate::Chain) is created with. None of them can change afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ChainError, Result};

/// Order used by [`ChainConfig::default()`].
pub const DEFAULT_ORDER: usize = 2;

/// Longest sentence [`ChainConfig::default()`] lets the chain generate, in words.
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Characters that end a sentence when splitting text in
/// [`Chain::add_text()`](crate::Chain::add_text()).
pub const DEFAULT_TERMINATORS: [char; 5] = ['.', '!', '?', ';', ':'];

/// Marks a generated sentence may end with.
pub const DEFAULT_ENDINGS: [&str; 3] = [".", "!", "?"];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    /// How many words make up an opening window, minus one. Must be at least 1.
    pub order: usize,
    /// Generation stops once a sentence has this many words. `None` only stops when the chain
    /// runs out of continuations.
    pub max_words: Option<usize>,
    /// Sentence terminators used when splitting text.
    pub terminators: Vec<char>,
    /// One of these is picked at random and appended to every generated sentence.
    pub endings: Vec<String>,
}

impl ChainConfig {
    pub fn with_order(order: usize) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Checks that a chain could be built with this configuration.
    ///
    /// # Errors
    ///
    /// - [`ChainError::InvalidOrder`] if `order` is zero, or too large to build a window with
    /// - [`ChainError::InvalidConfig`] if there are no endings, or if `max_words` is shorter than
    ///   an opening window
    pub fn validate(&self) -> Result<()> {
        // Windows of `order + 2` words must be representable
        if self.order == 0 || self.order.checked_add(2).is_none() {
            return Err(ChainError::InvalidOrder { order: self.order });
        }
        if self.endings.is_empty() {
            return Err(ChainError::config("at least one sentence ending is required"));
        }
        if let Some(max) = self.max_words {
            if max < self.window_len() {
                return Err(ChainError::config(format!(
                    "max_words {max} is shorter than an opening window of {} words",
                    self.window_len()
                )));
            }
        }
        Ok(())
    }

    /// Length of an opening window, `order + 1`.
    pub fn window_len(&self) -> usize {
        self.order + 1
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            max_words: Some(DEFAULT_MAX_WORDS),
            terminators: DEFAULT_TERMINATORS.to_vec(),
            endings: DEFAULT_ENDINGS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(ChainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_order_rejected() {
        assert_eq!(
            ChainConfig::with_order(0).validate(),
            Err(ChainError::InvalidOrder { order: 0 })
        );
    }

    #[test]
    fn huge_order_rejected() {
        for order in [usize::MAX, usize::MAX - 1] {
            let mut config = ChainConfig::with_order(order);
            config.max_words = None;
            assert_eq!(config.validate(), Err(ChainError::InvalidOrder { order }));
            assert_eq!(
                crate::Chain::new(order).unwrap_err(),
                ChainError::InvalidOrder { order }
            );
        }
        assert!(ChainConfig {
            max_words: None,
            ..ChainConfig::with_order(usize::MAX - 2)
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn no_endings_rejected() {
        let config = ChainConfig {
            endings: Vec::new(),
            ..ChainConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ChainError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn max_words_must_fit_a_window() {
        let mut config = ChainConfig::with_order(3);
        config.max_words = Some(3);
        assert!(config.validate().is_err());
        config.max_words = Some(4);
        assert!(config.validate().is_ok());
        config.max_words = None;
        assert!(config.validate().is_ok());
    }
}
