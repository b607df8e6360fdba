//! Password generation.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::{self, Pools};
use crate::error::GenerateError;

/// Shortest password that can hold one character of every mandatory class.
pub const MIN_LENGTH: usize = 4;

/// Longest password a single request may ask for.
pub const MAX_LENGTH: usize = 4096;

/// Parameters for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub include_specials: bool,
    pub exclude: BTreeSet<char>,
}

impl Request {
    pub fn new(length: usize, include_specials: bool, exclude: &str) -> Self {
        Self {
            length,
            include_specials,
            exclude: charset::exclusion_set(exclude),
        }
    }

    pub fn pools(&self) -> Pools {
        Pools::build(&self.exclude, self.include_specials)
    }

    /// Check the request without drawing anything: length bounds first, then
    /// the combined pool, then each mandatory pool.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.length < MIN_LENGTH {
            return Err(GenerateError::InvalidLength(self.length));
        }
        if self.length > MAX_LENGTH {
            return Err(GenerateError::TooLong(self.length));
        }

        let pools = self.pools();
        if pools.size() == 0 {
            return Err(GenerateError::EmptyPool(None));
        }
        if let Some(class) = pools.first_empty() {
            return Err(GenerateError::EmptyPool(Some(class)));
        }
        Ok(())
    }
}

/// A generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Generate a single password.
///
/// One character is drawn from every mandatory pool, the rest from the union
/// of enabled pools, and the whole sequence is shuffled so the mandatory
/// characters land in random positions.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, request: &Request) -> Result<Password, GenerateError> {
    request.validate()?;

    let pools = request.pools();
    let mut all_chars = pools.combined();

    log::debug!(
        "generating {} chars from {} candidates ({} mandatory classes)",
        request.length,
        all_chars.len(),
        pools.mandatory().len()
    );

    let mut chars: Vec<char> = Vec::with_capacity(request.length);
    for pool in pools.mandatory() {
        let c = pool
            .chars()
            .choose(rng)
            .ok_or(GenerateError::EmptyPool(Some(pool.class())))?;
        chars.push(*c);
    }

    while chars.len() < request.length {
        let c = all_chars.choose(rng).ok_or(GenerateError::EmptyPool(None))?;
        chars.push(*c);
    }

    chars.shuffle(rng);

    let password = Password(chars.iter().collect());
    chars.zeroize();
    all_chars.zeroize();
    Ok(password)
}

/// Generate `count` passwords, stopping at the first error.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    request: &Request,
    count: usize,
) -> Result<Vec<Password>, GenerateError> {
    (0..count).map(|_| generate(rng, request)).collect()
}
