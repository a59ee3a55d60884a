use serde::Serialize;

use crate::error::MigrationError;
use crate::state::{CharField, MigrationKey, ProjectState, ReplacedField};


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Operation {
    AlterField {
        model_name: String,
        name: String,
        field: CharField,
    },
}

impl Operation {
    pub fn alter_field(
        model_name: impl Into<String>,
        name: impl Into<String>,
        field: CharField,
    ) -> Self {
        Self::AlterField {
            model_name: model_name.into(),
            name: name.into(),
            field,
        }
    }

    fn validate(&self, migration: &MigrationKey) -> Result<(), MigrationError> {
        match self {
            Self::AlterField { field, .. } => field.validate(migration),
        }
    }

    fn forward(
        &self,
        migration: &MigrationKey,
        state: &mut ProjectState,
    ) -> Result<ReplacedField, MigrationError> {
        match self {
            Self::AlterField {
                model_name,
                name,
                field,
            } => {
                let current = state.field_mut(model_name, name).ok_or_else(|| {
                    MigrationError::PrecedentMismatch {
                        migration: migration.to_owned(),
                        expected: format!("{model_name}.{name}"),
                        reason: "field does not exist".to_owned(),
                    }
                })?;

                let previous = std::mem::replace(current, field.to_owned());
                Ok(ReplacedField {
                    model: model_name.to_owned(),
                    field: name.to_owned(),
                    definition: previous,
                })
            }
        }
    }
}

/// A single, immutable link of the migration chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaChange {
    pub key: MigrationKey,
    pub dependencies: Vec<MigrationKey>,
    pub operations: Vec<Operation>,
}

impl SchemaChange {
    pub fn validate(&self) -> Result<(), MigrationError> {
        self.operations
            .iter()
            .try_for_each(|operation| operation.validate(&self.key))
    }

    /// Returns `current` with this change applied on top of it.
    ///
    /// Already applied changes leave the state as it is.
    pub fn apply(&self, current: &ProjectState) -> Result<ProjectState, MigrationError> {
        self.validate()?;

        if current.is_applied(&self.key) {
            tracing::debug!(migration = %self.key, "Already applied, skipping");
            return Ok(current.to_owned());
        }

        if let Some(missing) = self
            .dependencies
            .iter()
            .find(|dependency| !current.is_applied(dependency))
        {
            return Err(MigrationError::PrecedentMismatch {
                migration: self.key.to_owned(),
                expected: missing.to_string(),
                reason: "predecessor is not applied".to_owned(),
            });
        }

        let mut next = current.to_owned();
        let replaced = self
            .operations
            .iter()
            .map(|operation| operation.forward(&self.key, &mut next))
            .collect::<Result<Vec<_>, _>>()?;
        next.mark_applied(self.key.to_owned(), replaced);

        tracing::info!(migration = %self.key, "Applied");
        Ok(next)
    }

    /// Returns `current` with the field definitions this change replaced restored.
    ///
    /// Changes that are not applied leave the state as it is.
    pub fn revert(&self, current: &ProjectState) -> Result<ProjectState, MigrationError> {
        if !current.is_applied(&self.key) {
            tracing::debug!(migration = %self.key, "Not applied, nothing to revert");
            return Ok(current.to_owned());
        }

        let mut previous = current.to_owned();
        let Some(replaced) = previous.unmark_applied(&self.key) else {
            tracing::warn!(migration = %self.key, "Prior definition not recorded");
            return Err(self.irreversible("prior field definition was not recorded"));
        };

        for ReplacedField {
            model,
            field,
            definition,
        } in replaced.into_iter().rev()
        {
            let slot = previous
                .field_mut(&model, &field)
                .ok_or_else(|| self.irreversible(&format!("field {model}.{field} is gone")))?;
            *slot = definition;
        }

        tracing::info!(migration = %self.key, "Reverted");
        Ok(previous)
    }

    fn irreversible(&self, reason: &str) -> MigrationError {
        MigrationError::IrreversibleChange {
            migration: self.key.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
