//! Character classes and pool building for password generation.

use std::collections::BTreeSet;
use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Punctuation,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Punctuation,
    ];

    /// Fixed base alphabet for this class, before any exclusion.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Punctuation => PUNCTUATION,
        }
    }

    /// Class of `c`, or `None` for characters outside every base alphabet.
    #[cfg(test)]
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.alphabet().contains(c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digit => "digit",
            CharClass::Punctuation => "special",
        };
        f.write_str(name)
    }
}

/// Candidate characters for one class after exclusions, in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPool {
    class: CharClass,
    chars: Vec<char>,
}

impl CharPool {
    pub fn new(class: CharClass, exclude: &BTreeSet<char>) -> Self {
        let chars = class
            .alphabet()
            .chars()
            .filter(|c| !exclude.contains(c))
            .collect();
        Self { class, chars }
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The pools taking part in one generation call.
#[derive(Debug, Clone)]
pub struct Pools {
    mandatory: Vec<CharPool>,
}

impl Pools {
    /// Build every enabled pool. Punctuation only participates when
    /// `include_specials` is set.
    pub fn build(exclude: &BTreeSet<char>, include_specials: bool) -> Self {
        let mandatory = CharClass::ALL
            .into_iter()
            .filter(|class| include_specials || *class != CharClass::Punctuation)
            .map(|class| CharPool::new(class, exclude))
            .collect();
        Self { mandatory }
    }

    /// Pools that must each contribute at least one character.
    pub fn mandatory(&self) -> &[CharPool] {
        &self.mandatory
    }

    /// First mandatory class left with nothing to draw from.
    pub fn first_empty(&self) -> Option<CharClass> {
        self.mandatory.iter().find(|p| p.is_empty()).map(CharPool::class)
    }

    /// Union of all enabled pools, used for filler characters.
    pub fn combined(&self) -> Vec<char> {
        self.mandatory
            .iter()
            .flat_map(|p| p.chars().iter().copied())
            .collect()
    }

    /// Size of the combined pool (for entropy calculation).
    pub fn size(&self) -> usize {
        self.mandatory.iter().map(|p| p.chars().len()).sum()
    }
}

/// Collect a free-text exclusion string into a character set.
pub fn exclusion_set(exclude: &str) -> BTreeSet<char> {
    exclude.chars().collect()
}
