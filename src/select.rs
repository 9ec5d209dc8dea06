//! Uniform random selection, used for everything the chain picks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ChainError, Result};

/// Chooses one element of `items` uniformly over its positions.
///
/// Since it is the positions that are equally likely, and not the distinct values, a value that
/// appears twice is twice as likely to be picked. `pool` names what is being chosen from, and is
/// only used in the error.
///
/// # Errors
///
/// [`ChainError::EmptyPool`] if `items` is empty.
pub fn sample<'a, T, R>(rng: &mut R, items: &'a [T], pool: &'static str) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(ChainError::EmptyPool { pool })
}
