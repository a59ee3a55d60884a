use std::fmt;

use serde::Serialize;

use crate::error::MigrationError;

/// Identity of one link in a migration chain, e.g. `database.0067_alter_agent_style_icon`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MigrationKey {
    pub app: String,
    pub number: u32,
    pub name: String,
}

impl MigrationKey {
    pub fn new(app: impl Into<String>, number: u32, name: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            number,
            name: name.into(),
        }
    }

    /// Parses a stored migration name of the form `<number>_<name>`.
    pub fn parse(app: &str, stored_name: &str) -> Result<Self, MigrationError> {
        let invalid = || MigrationError::InvalidKey(format!("{app}.{stored_name}"));

        let (number, name) = stored_name.split_once('_').ok_or_else(invalid)?;
        if name.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = number.parse().map_err(|_| invalid())?;

        Ok(Self::new(app, number, name))
    }

    /// Name as recorded by the runner's ledger, e.g. `0067_alter_agent_style_icon`.
    pub fn stored_name(&self) -> String {
        format!("{:04}_{}", self.number, self.name)
    }
}

impl fmt::Display for MigrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:04}_{}", self.app, self.number, self.name)
    }
}
