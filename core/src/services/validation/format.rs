//! Pattern-based field validators

use std::fmt;

use async_trait::async_trait;
use regex::Regex;
use ua_shared::validation::validators;

use crate::errors::{DomainError, DomainResult, ValidationError};

use super::Validator;

/// Field a [`FormatValidator`] guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    Email,
    Password,
}

impl FormatRule {
    fn violation(self) -> ValidationError {
        match self {
            FormatRule::Email => ValidationError::InvalidEmailFormat,
            FormatRule::Password => ValidationError::InvalidPasswordFormat,
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRule::Email => write!(f, "email"),
            FormatRule::Password => write!(f, "password"),
        }
    }
}

/// Whole-string match of a field against a configured pattern
#[derive(Debug, Clone)]
pub struct FormatValidator {
    rule: FormatRule,
    pattern: Regex,
}

impl FormatValidator {
    /// Compiles `pattern` for `rule`
    ///
    /// The pattern is anchored on both ends, so it must match the entire
    /// value. Patterns the `regex` engine cannot compile (look-around,
    /// back-references, plain syntax errors) yield `DomainError::Configuration`.
    pub fn new(rule: FormatRule, pattern: &str) -> DomainResult<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let pattern = Regex::new(&anchored).map_err(|e| {
            DomainError::configuration(format!("invalid {} pattern: {}", rule, e))
        })?;

        Ok(Self { rule, pattern })
    }

    pub fn email(pattern: &str) -> DomainResult<Self> {
        Self::new(FormatRule::Email, pattern)
    }

    pub fn password(pattern: &str) -> DomainResult<Self> {
        Self::new(FormatRule::Password, pattern)
    }

    pub fn rule(&self) -> FormatRule {
        self.rule
    }

    /// Missing, empty and whitespace-only values always fail
    pub fn check(&self, value: Option<&str>) -> DomainResult<()> {
        match value {
            Some(text)
                if validators::present(value)
                    && validators::matches_pattern(text, &self.pattern) =>
            {
                Ok(())
            }
            _ => Err(self.rule.violation().into()),
        }
    }
}

#[async_trait]
impl Validator<str> for FormatValidator {
    async fn validate(&self, input: &str) -> DomainResult<()> {
        self.check(Some(input))
    }
}
