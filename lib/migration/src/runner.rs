use sea_orm::DatabaseConnection;
use sea_orm_migration::MigrationStatus;
use sea_orm_migration::prelude::*;

use crate::Migrator;

/// Applies every pending link of the chain.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::info!("Database schema is up to date");
        return Ok(());
    }

    for migration in &pending {
        tracing::info!(migration = migration.name(), "Pending migration");
    }

    Migrator::up(db, None).await
}

/// Reverts the most recently applied link.
pub async fn revert_last(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::down(db, Some(1)).await.inspect_err(|err| {
        tracing::error!(%err, "Migrating down failed");
    })
}

/// Stored name and status of every link known to the chain.
pub async fn migration_status(
    db: &DatabaseConnection,
) -> Result<Vec<(String, MigrationStatus)>, DbErr> {
    Ok(Migrator::get_migration_with_status(db)
        .await?
        .into_iter()
        .map(|migration| (migration.name().to_owned(), migration.status()))
        .collect())
}
