use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::PasswordError;

/// Shortest password the controller produces.
pub const MIN_LENGTH: u8 = 6;
/// Longest password the controller produces.
pub const MAX_LENGTH: u8 = 100;
/// Length of the first password shown to the user.
pub const DEFAULT_LENGTH: u8 = 8;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~`";

/// User-controlled parameters governing password generation.
///
/// Defaults to an 8 character password made of letters only.
///
/// ```
/// # use passgen_generators::Configuration;
/// let configuration = Configuration {
///     length: 8,
///     include_digits: false,
///     include_symbols: false,
/// };
/// assert_eq!(configuration, Configuration::default());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct Configuration {
    /// Number of characters in the password. Kept within [`MIN_LENGTH`]..=[`MAX_LENGTH`] by the
    /// controller.
    pub length: u8,
    /// Include digits (0-9)
    pub include_digits: bool,
    /// Include symbols (!@#$%^&*-_+=[]{}~`)
    pub include_symbols: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl Configuration {
    /// Clamp a requested length into [`MIN_LENGTH`]..=[`MAX_LENGTH`].
    pub fn clamp_length(length: usize) -> u8 {
        let clamped = length.clamp(usize::from(MIN_LENGTH), usize::from(MAX_LENGTH));
        u8::try_from(clamped).unwrap_or(MAX_LENGTH)
    }

    /// Return a copy of the configuration with its length clamped.
    pub fn clamped(self) -> Self {
        Self {
            length: Self::clamp_length(usize::from(self.length)),
            ..self
        }
    }
}

/// A fixed group of characters that can be part of an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    /// A-Z followed by a-z
    Letters,
    /// 0-9
    Digits,
    /// !@#$%^&*-_+=[]{}~`
    Symbols,
}

impl CharSet {
    /// The characters in this set, in a fixed order.
    pub fn chars(self) -> &'static str {
        match self {
            CharSet::Letters => LETTERS,
            CharSet::Digits => DIGITS,
            CharSet::Symbols => SYMBOLS,
        }
    }
}

/// The characters eligible for a password. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Letters are always present, digits and symbols follow the configuration.
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, PasswordError> {
        let mut sets = vec![CharSet::Letters];
        if configuration.include_digits {
            sets.push(CharSet::Digits);
        }
        if configuration.include_symbols {
            sets.push(CharSet::Symbols);
        }
        Self::from_sets(&sets)
    }

    /// Concatenate the given sets in order.
    pub fn from_sets(sets: &[CharSet]) -> Result<Self, PasswordError> {
        let chars: Vec<char> = sets.iter().flat_map(|set| set.chars().chars()).collect();
        if chars.is_empty() {
            return Err(PasswordError::InvalidConfiguration);
        }
        Ok(Self { chars })
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[allow(missing_docs)]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Draw `length` characters independently and uniformly from the alphabet.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
        // `from_sets` rejects empty alphabets, so the range is never empty
        (0..length)
            .map(|_| self.chars[rng.gen_range(0..self.chars.len())])
            .collect()
    }
}

/// Generate a password using a general purpose, non-cryptographic random generator.
pub fn generate(configuration: &Configuration) -> Result<String, PasswordError> {
    generate_with_rng(&mut SmallRng::from_entropy(), configuration)
}

/// Generate a password drawing from the provided random generator.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    configuration: &Configuration,
) -> Result<String, PasswordError> {
    let alphabet = Alphabet::from_configuration(configuration)?;
    Ok(alphabet.sample(rng, usize::from(configuration.length)))
}
