//! Customer payload validation
//!
//! Runs before a payload reaches any store. The blank check is applied
//! first, so a name that is both blank and too short reports only
//! [`ViolationCode::Blank`].

use std::fmt;

use crate::types::CustomerDto;

/// Minimum accepted name length, in characters.
pub const NAME_MIN_LEN: usize = 3;

/// Maximum accepted name length, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Kind of constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationCode {
    Blank,
    Size,
}

impl ViolationCode {
    pub fn message(&self) -> String {
        match self {
            ViolationCode::Blank => "must not be blank".to_string(),
            ViolationCode::Size => {
                format!("size must be between {} and {}", NAME_MIN_LEN, NAME_MAX_LEN)
            }
        }
    }
}

/// A rejected field, rendered as `"<field> : <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub code: ViolationCode,
}

impl ValidationError {
    pub fn new(field: &'static str, code: ViolationCode) -> Self {
        Self { field, code }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.field, self.code.message())
    }
}

impl std::error::Error for ValidationError {}

/// Check a customer payload for create or update.
pub fn validate_customer(dto: &CustomerDto) -> Result<(), ValidationError> {
    validate_name(dto.name.as_deref())
}

fn validate_name(name: Option<&str>) -> Result<(), ValidationError> {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ValidationError::new("name", ViolationCode::Blank)),
    };

    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::new("name", ViolationCode::Size));
    }

    Ok(())
}
