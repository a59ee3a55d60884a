use std::collections::HashSet;

use serde::Serialize;

use super::MigrationKey;
use crate::error::MigrationError;

/// One permitted stored value and its presentation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: String,
    pub label: String,
}

impl Choice {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl<C: Into<String>, L: Into<String>> From<(C, L)> for Choice {
    fn from((code, label): (C, L)) -> Self {
        Self::new(code, label)
    }
}

/// Bounded text column, optionally restricted to a list of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharField {
    pub max_length: u32,
    pub default: Option<String>,
    pub choices: Vec<Choice>,
    pub null: bool,
}

impl CharField {
    pub fn new(max_length: u32) -> Self {
        Self {
            max_length,
            default: None,
            choices: vec![],
            null: false,
        }
    }

    pub fn with_choices<I>(mut self, choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|choice| choice.code.as_str())
    }

    pub fn label_of(&self, code: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.code == code)
            .map(|choice| choice.label.as_str())
    }

    fn fits(&self, value: &str) -> bool {
        value.chars().count() <= self.max_length as usize
    }

    /// Checks the authored definition: unique codes that fit the column, and a default among them.
    pub fn validate(&self, migration: &MigrationKey) -> Result<(), MigrationError> {
        let invalid = |reason: String| MigrationError::InvalidDefinition {
            migration: migration.to_owned(),
            reason,
        };

        let mut seen = HashSet::new();
        for code in self.codes() {
            if !seen.insert(code) {
                return Err(invalid(format!("duplicate choice `{code}`")));
            }
            if !self.fits(code) {
                return Err(invalid(format!(
                    "choice `{code}` exceeds max_length {}",
                    self.max_length
                )));
            }
        }

        if let Some(default) = &self.default {
            if !self.fits(default) {
                return Err(invalid(format!(
                    "default `{default}` exceeds max_length {}",
                    self.max_length
                )));
            }
            if !self.choices.is_empty() && !seen.contains(default.as_str()) {
                return Err(invalid(format!("default `{default}` is not a choice")));
            }
        }

        Ok(())
    }

    /// Guard for a value about to be written into `model.field`.
    pub fn check_value(
        &self,
        model: &str,
        field: &str,
        value: &str,
    ) -> Result<(), MigrationError> {
        let violation = |reason: String| MigrationError::ConstraintViolation {
            model: model.to_owned(),
            field: field.to_owned(),
            value: value.to_owned(),
            reason,
        };

        if !self.fits(value) {
            return Err(violation(format!("longer than {}", self.max_length)));
        }
        if !self.choices.is_empty() && !self.codes().any(|code| code == value) {
            return Err(violation("not a permitted choice".to_owned()));
        }

        Ok(())
    }
}
