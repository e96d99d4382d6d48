use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical AWS account identifier: exactly twelve ASCII digits.
///
/// Validation happens once at construction; every value of this type is
/// well-formed for the rest of its life.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct AccountId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("account id must be exactly 12 digits, got {0} characters")]
    WrongLength(usize),
    #[error("account id must contain only ASCII digits: {0:?}")]
    NonDigit(String),
}

impl AccountId {
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, AccountIdError> {
        let v = s.as_ref();
        if v.len() != 12 {
            return Err(AccountIdError::WrongLength(v.len()));
        }
        if !v.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountIdError::NonDigit(v.to_string()));
        }
        Ok(Self(v.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_twelve_digits() {
        let id = AccountId::new("123456789012").expect("valid account id");
        assert_eq!(id.as_str(), "123456789012");
        assert_eq!(id.to_string(), "123456789012");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            AccountId::new("12345"),
            Err(AccountIdError::WrongLength(5))
        );
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(
            AccountId::new("12345678901x"),
            Err(AccountIdError::NonDigit(_))
        ));
    }
}
