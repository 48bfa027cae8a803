use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+";

/// Which character classes go into the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClassSelection {
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl CharacterClassSelection {
    pub fn all() -> Self {
        Self {
            include_lower: true,
            include_upper: true,
            include_digits: true,
            include_symbols: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.include_lower || self.include_upper || self.include_digits || self.include_symbols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("No character class selected")]
    EmptyAlphabet,

    #[error("Password length must be positive, got {0}")]
    NonPositiveLength(i64),
}

/// Concatenates the fixed character sets for every enabled class.
///
/// Order is always upper, lower, digits, symbols. Nothing is deduplicated,
/// and an empty selection yields an empty alphabet.
pub fn build_alphabet(selection: &CharacterClassSelection) -> String {
    let mut alphabet = String::new();

    if selection.include_upper {
        alphabet.push_str(UPPERCASE_CHARS);
    }
    if selection.include_lower {
        alphabet.push_str(LOWERCASE_CHARS);
    }
    if selection.include_digits {
        alphabet.push_str(DIGIT_CHARS);
    }
    if selection.include_symbols {
        alphabet.push_str(SYMBOL_CHARS);
    }

    alphabet
}

/// Samples `length` characters from `alphabet` using the thread-local RNG.
pub fn generate(alphabet: &str, length: i64) -> Result<String, GenerateError> {
    let mut rng = rand::rng();
    generate_with(&mut rng, alphabet, length)
}

/// Same as [`generate`], drawing from the supplied RNG.
///
/// Every index comes from `random_range(0..len)`, so it always lands inside
/// the alphabet. Length is counted in chars, not bytes.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &str,
    length: i64,
) -> Result<String, GenerateError> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    if length <= 0 {
        return Err(GenerateError::NonPositiveLength(length));
    }

    let password = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..chars.len());
            chars[idx]
        })
        .collect();

    Ok(password)
}

/// Builds the alphabet for `selection` and generates from it.
pub fn generate_for(
    selection: &CharacterClassSelection,
    length: i64,
) -> Result<String, GenerateError> {
    generate(&build_alphabet(selection), length)
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_alphabet_empty_selection() {
        let alphabet = build_alphabet(&CharacterClassSelection::default());
        assert!(alphabet.is_empty());
    }

    #[test]
    fn test_build_alphabet_all_classes_in_order() {
        let alphabet = build_alphabet(&CharacterClassSelection::all());
        let expected = format!("{UPPERCASE_CHARS}{LOWERCASE_CHARS}{DIGIT_CHARS}{SYMBOL_CHARS}");
        assert_eq!(alphabet, expected);
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 12);
    }

    #[test]
    fn test_build_alphabet_lower_and_digits() {
        let selection = CharacterClassSelection {
            include_lower: true,
            include_digits: true,
            ..Default::default()
        };
        assert_eq!(build_alphabet(&selection), "abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn test_build_alphabet_upper_precedes_lower() {
        let selection = CharacterClassSelection {
            include_lower: true,
            include_upper: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&selection);
        assert!(alphabet.starts_with('A'));
        assert!(alphabet.ends_with('z'));
    }

    #[test]
    fn test_generate_exact_length() {
        let pwd = generate("abc", 8).unwrap();
        assert_eq!(pwd.chars().count(), 8);
        assert!(pwd.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn test_generate_non_positive_length() {
        assert_eq!(generate("abc", 0), Err(GenerateError::NonPositiveLength(0)));
        assert_eq!(generate("abc", -5), Err(GenerateError::NonPositiveLength(-5)));
    }

    #[test]
    fn test_generate_empty_alphabet() {
        assert_eq!(generate("", 8), Err(GenerateError::EmptyAlphabet));
        // Empty alphabet is reported first
        assert_eq!(generate("", 0), Err(GenerateError::EmptyAlphabet));
    }

    #[test]
    fn test_generate_single_char_alphabet() {
        assert_eq!(generate("x", 5).unwrap(), "xxxxx");
    }

    #[test]
    fn test_generate_counts_chars_not_bytes() {
        let pwd = generate("äö", 4).unwrap();
        assert_eq!(pwd.chars().count(), 4);
    }

    #[test]
    fn test_generate_reaches_last_character() {
        // Every index including the last one must be reachable
        let mut rng = StdRng::seed_from_u64(7);
        let pwd = generate_with(&mut rng, "ab", 256).unwrap();
        assert!(pwd.contains('a'));
        assert!(pwd.contains('b'));
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        let alphabet = build_alphabet(&CharacterClassSelection::all());
        assert_eq!(
            generate_with(&mut first, &alphabet, 10).unwrap(),
            generate_with(&mut second, &alphabet, 10).unwrap()
        );
    }

    #[test]
    fn test_generate_varies_between_calls() {
        let alphabet = build_alphabet(&CharacterClassSelection::all());
        let samples: Vec<String> = (0..5).map(|_| generate(&alphabet, 10).unwrap()).collect();
        assert!(samples.iter().any(|s| s != &samples[0]));
    }

    #[test]
    fn test_generate_for_selection() {
        let selection = CharacterClassSelection {
            include_lower: true,
            include_digits: true,
            ..Default::default()
        };
        let pwd = generate_for(&selection, 6).unwrap();
        assert_eq!(pwd.len(), 6);
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        assert_eq!(
            generate_for(&CharacterClassSelection::default(), 6),
            Err(GenerateError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_selection_is_empty() {
        assert!(CharacterClassSelection::default().is_empty());
        assert!(!CharacterClassSelection::all().is_empty());
    }
}
