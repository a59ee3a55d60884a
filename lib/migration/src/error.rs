use sea_orm::DbErr;
use thiserror::Error;

use crate::state::MigrationKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    #[error("Migration `{migration}` requires `{expected}`: {reason}")]
    PrecedentMismatch {
        migration: MigrationKey,
        expected: String,
        reason: String,
    },

    #[error("Migration `{migration}` is irreversible: {reason}")]
    IrreversibleChange {
        migration: MigrationKey,
        reason: String,
    },

    #[error("Value `{value}` rejected by `{model}.{field}`: {reason}")]
    ConstraintViolation {
        model: String,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid definition in migration `{migration}`: {reason}")]
    InvalidDefinition {
        migration: MigrationKey,
        reason: String,
    },

    #[error("Invalid migration key `{0}`")]
    InvalidKey(String),
}

impl From<MigrationError> for DbErr {
    fn from(value: MigrationError) -> Self {
        DbErr::Migration(value.to_string())
    }
}
