use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

use crate::change::{Operation, SchemaChange};
use crate::datatype::{ColumnDefExt, db_table};
use crate::error::MigrationError;
use crate::state::CharField;

/// Runs the forward DDL of `change` against the connected database.
pub(crate) async fn forward(
    change: &SchemaChange,
    manager: &SchemaManager<'_>,
) -> Result<(), DbErr> {
    change.validate()?;

    for operation in &change.operations {
        match operation {
            Operation::AlterField {
                model_name,
                name,
                field,
            } => {
                let table = db_table(&change.key.app, model_name);
                ensure_column(change, manager, &table, name).await?;

                match manager.get_database_backend() {
                    DatabaseBackend::MySql | DatabaseBackend::Postgres => {
                        manager
                            .alter_table(alter_char_field(&table, name, field))
                            .await?;
                    }
                    // SQLite neither alters columns in place nor enforces varchar length.
                    DatabaseBackend::Sqlite => {
                        tracing::debug!(
                            migration = %change.key,
                            %table,
                            column = %name,
                            "Column left as is on SQLite"
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn alter_char_field(
    table: &str,
    column: &str,
    field: &CharField,
) -> TableAlterStatement {
    Table::alter()
        .table(Alias::new(table))
        .modify_column(ColumnDef::new(Alias::new(column)).char_field(field))
        .to_owned()
}

async fn ensure_column(
    change: &SchemaChange,
    manager: &SchemaManager<'_>,
    table: &str,
    column: &str,
) -> Result<(), DbErr> {
    let mismatch = |reason: &str| MigrationError::PrecedentMismatch {
        migration: change.key.to_owned(),
        expected: format!("{table}.{column}"),
        reason: reason.to_owned(),
    };

    if !manager.has_table(table).await? {
        return Err(mismatch("table does not exist").into());
    }
    if !manager.has_column(table, column).await? {
        return Err(mismatch("column does not exist").into());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::m0067_alter_agent_style_icon::change;

    fn style_icon_statement() -> TableAlterStatement {
        let change = change().unwrap();
        let Operation::AlterField {
            model_name,
            name,
            field,
        } = &change.operations[0];
        alter_char_field(&db_table(&change.key.app, model_name), name, field)
    }

    #[test]
    fn test_alter_style_icon_mysql() {
        assert_eq!(
            style_icon_statement().to_string(MysqlQueryBuilder),
            "ALTER TABLE `database_agent` MODIFY COLUMN `style_icon` varchar(200) NOT NULL DEFAULT 'Lightbulb'"
        );
    }

    #[test]
    fn test_alter_style_icon_postgres() {
        assert_eq!(
            style_icon_statement().to_string(PostgresQueryBuilder),
            concat!(
                r#"ALTER TABLE "database_agent" "#,
                r#"ALTER COLUMN "style_icon" TYPE varchar(200), "#,
                r#"ALTER COLUMN "style_icon" SET NOT NULL, "#,
                r#"ALTER COLUMN "style_icon" SET DEFAULT 'Lightbulb'"#
            )
        );
    }

    #[test]
    fn test_nullable_field_without_default() {
        let mut field = CharField::new(20);
        field.null = true;

        assert_eq!(
            alter_char_field("shop_shirt", "colour", &field).to_string(MysqlQueryBuilder),
            "ALTER TABLE `shop_shirt` MODIFY COLUMN `colour` varchar(20) NULL"
        );
    }
}
