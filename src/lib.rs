//! Dead simple sentence generation using markov chains.
//!
//! A [`Chain`] is fed sentences, split into words on whitespace. For a chain of order `n`, the
//! first `n + 1` words of every sentence are remembered as a possible opening, and each word
//! after that is remembered as a possible continuation of the `n + 1` words before it. New
//! sentences are made by picking a random opening and then randomly picking continuations
//! (weighted by how often they were seen) until there are none.
//!
//! ```
//! # use sentencechain::Chain;
//! # use rand::thread_rng;
//! let mut chain = Chain::new(2).unwrap();
//! chain.add_text("The cat sat on the mat. The dog sat on the cat!");
//!
//! let sentence = chain.generate_sentence(&mut thread_rng()).unwrap();
//! assert!(sentence.starts_with("The "));
//! ```
//!
//! # Features
//!
//! `sentencechain` comes with some features that you can disable (or enable) at will. They are:
//!
//! - `inline-more` - Enables the `hashbrown` feature of the same name. Enabled by default.
//! - `serde` - Derives `Serialize` and `Deserialize` for [`Chain`] and the types it is made of.

pub mod chain;
pub mod config;
pub mod continuation;
pub mod error;
pub mod select;
pub mod split;
pub mod token;

pub use chain::Chain;
pub use config::ChainConfig;
pub use continuation::Continuations;
pub use error::ChainError;
pub use token::TokenPair;
