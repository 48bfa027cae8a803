//! Form state for the generator screen.
//!
//! Holds the raw length input, the four class toggles and the result of the
//! last generation. The result is a single [`GenerationState`] value, so a
//! password can never exist without being marked as generated.

use thiserror::Error;
use zeroize::Zeroize;

use crate::password::{CharacterClassSelection, GenerateError, build_alphabet, generate};

/// Shortest password the form accepts
pub const MIN_LENGTH: usize = 4;
/// Longest password the form accepts
pub const MAX_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Password length is required")]
    Required,

    #[error("Password length must be a number")]
    NotANumber,

    #[error("Minimum length is 4")]
    TooShort,

    #[error("Maximum length is 10")]
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Length(#[from] LengthError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result of the last generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    NotGenerated,
    Generated(String),
}

impl GenerationState {
    pub fn password(&self) -> Option<&str> {
        match self {
            GenerationState::NotGenerated => None,
            GenerationState::Generated(pwd) => Some(pwd),
        }
    }

    /// Scrubs any held password and returns to `NotGenerated`.
    fn clear(&mut self) {
        if let GenerationState::Generated(pwd) = self {
            pwd.zeroize();
        }
        *self = GenerationState::NotGenerated;
    }
}

/// Parses and bounds-checks the length field as typed by the user.
pub fn validate_length(input: &str) -> Result<usize, LengthError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Required);
    }

    // Negative numbers parse fine here and fall into TooShort
    let value: i64 = trimmed.parse().map_err(|_| LengthError::NotANumber)?;
    if value < MIN_LENGTH as i64 {
        return Err(LengthError::TooShort);
    }
    if value > MAX_LENGTH as i64 {
        return Err(LengthError::TooLong);
    }
    Ok(value as usize)
}

#[derive(Debug, Default)]
pub struct PasswordForm {
    pub length_input: String,
    pub selection: CharacterClassSelection,
    state: GenerationState,
}

impl PasswordForm {
    pub fn new(selection: CharacterClassSelection) -> Self {
        Self {
            length_input: String::new(),
            selection,
            state: GenerationState::NotGenerated,
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn password(&self) -> Option<&str> {
        self.state.password()
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.state, GenerationState::Generated(_))
    }

    pub fn length_error(&self) -> Option<LengthError> {
        validate_length(&self.length_input).err()
    }

    pub fn is_valid(&self) -> bool {
        self.length_error().is_none()
    }

    pub fn toggle_lower(&mut self) {
        self.selection.include_lower = !self.selection.include_lower;
    }

    pub fn toggle_upper(&mut self) {
        self.selection.include_upper = !self.selection.include_upper;
    }

    pub fn toggle_digits(&mut self) {
        self.selection.include_digits = !self.selection.include_digits;
    }

    pub fn toggle_symbols(&mut self) {
        self.selection.include_symbols = !self.selection.include_symbols;
    }

    /// Validates the length and generates a new password.
    ///
    /// On error the previous state is kept untouched.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let length = validate_length(&self.length_input)?;
        let alphabet = build_alphabet(&self.selection);
        let password = generate(&alphabet, length as i64)?;

        log::debug!(
            "Generated password of length {} from a {}-character alphabet",
            length,
            alphabet.chars().count()
        );

        self.state.clear();
        self.state = GenerationState::Generated(password);
        Ok(())
    }

    /// Drops the result, unchecks every class and empties the length field.
    pub fn reset(&mut self) {
        self.state.clear();
        self.selection = CharacterClassSelection::default();
        self.length_input.clear();
        log::debug!("Password form reset");
    }
}

impl Drop for PasswordForm {
    fn drop(&mut self) {
        self.state.clear();
    }
}
