//! In-memory view of the schema as the migration chain sees it.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

mod field;
mod key;


pub use field::{CharField, Choice};
pub use key::MigrationKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelState {
    pub fields: BTreeMap<String, CharField>,
}

/// Field definition overwritten by an applied migration, kept so the migration can be reverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacedField {
    pub model: String,
    pub field: String,
    pub definition: CharField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectState {
    applied: BTreeSet<MigrationKey>,
    models: BTreeMap<String, ModelState>,
    journal: BTreeMap<MigrationKey, Vec<ReplacedField>>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_applied(mut self, key: MigrationKey) -> Self {
        self.applied.insert(key);
        self
    }

    pub fn with_field(
        mut self,
        model: impl Into<String>,
        field: impl Into<String>,
        definition: CharField,
    ) -> Self {
        self.models
            .entry(model.into())
            .or_default()
            .fields
            .insert(field.into(), definition);
        self
    }

    pub fn is_applied(&self, key: &MigrationKey) -> bool {
        self.applied.contains(key)
    }

    pub fn applied(&self) -> impl Iterator<Item = &MigrationKey> {
        self.applied.iter()
    }

    /// Latest applied link of `app`.
    pub fn head(&self, app: &str) -> Option<&MigrationKey> {
        self.applied.iter().filter(|key| key.app == app).next_back()
    }

    pub fn model(&self, model: &str) -> Option<&ModelState> {
        self.models.get(model)
    }

    pub fn field(&self, model: &str, field: &str) -> Option<&CharField> {
        self.models.get(model)?.fields.get(field)
    }

    pub(crate) fn field_mut(&mut self, model: &str, field: &str) -> Option<&mut CharField> {
        self.models.get_mut(model)?.fields.get_mut(field)
    }

    pub(crate) fn mark_applied(&mut self, key: MigrationKey, replaced: Vec<ReplacedField>) {
        self.journal.insert(key.to_owned(), replaced);
        self.applied.insert(key);
    }

    /// Forgets `key` and hands back what it replaced, if that was recorded.
    pub(crate) fn unmark_applied(&mut self, key: &MigrationKey) -> Option<Vec<ReplacedField>> {
        self.applied.remove(key);
        self.journal.remove(key)
    }
}
