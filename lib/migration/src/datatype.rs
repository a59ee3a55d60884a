use sea_orm_migration::prelude::*;

use crate::state::CharField;

pub trait ColumnDefExt {
    fn char_field(&mut self, field: &CharField) -> &mut ColumnDef;
}

impl ColumnDefExt for ColumnDef {
    /// Storage shape of a `CharField`. Choices are not enforced by the database.
    fn char_field(&mut self, field: &CharField) -> &mut ColumnDef {
        self.string_len(field.max_length);

        if field.null {
            self.null();
        } else {
            self.not_null();
        }

        if let Some(default) = &field.default {
            self.default(default.to_owned());
        }

        self
    }
}

/// Physical table of `model` in `app`, e.g. `database_agent`.
pub(crate) fn db_table(app: &str, model: &str) -> String {
    format!("{app}_{model}")
}
