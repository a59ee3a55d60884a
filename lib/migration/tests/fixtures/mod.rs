use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(super) enum Agent {
    #[sea_orm(iden = "database_agent")]
    Table,
    Id,
    Name,
    StyleIcon,
}

pub(super) async fn empty_database() -> DatabaseConnection {
    // every pooled connection would open its own in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

/// Database whose `database_agent` table is as the predecessor migration left it.
pub(super) async fn predecessor_database() -> DatabaseConnection {
    let db = empty_database().await;

    SchemaManager::new(&db)
        .create_table(
            Table::create()
                .table(Agent::Table)
                .col(
                    ColumnDef::new(Agent::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Agent::Name).string_len(200).not_null())
                .col(
                    ColumnDef::new(Agent::StyleIcon)
                        .string_len(200)
                        .not_null()
                        .default("Lightbulb"),
                )
                .to_owned(),
        )
        .await
        .unwrap();

    db
}
