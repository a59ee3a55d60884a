use migration::runner::{migration_status, revert_last, run_migrations};
use migration::{Migrator, changes};
use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::prelude::*;
use sea_orm_migration::MigrationStatus;

use crate::fixtures::{empty_database, predecessor_database};

const STORED_NAME: &str = "0067_alter_agent_style_icon";

#[tokio::test]
async fn test_up_on_predecessor_schema() {
    let db = predecessor_database().await;

    run_migrations(&db).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_column("database_agent", "style_icon").await.unwrap());

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].name(), STORED_NAME);
}

#[tokio::test]
async fn test_up_twice_is_noop() {
    let db = predecessor_database().await;

    run_migrations(&db).await.unwrap();
    run_migrations(&db).await.unwrap();

    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_up_without_agent_table() {
    let db = empty_database().await;

    let err = run_migrations(&db).await.unwrap_err();

    let DbErr::Migration(message) = err else {
        panic!("unexpected error: {err}");
    };
    assert!(message.contains("database.0067_alter_agent_style_icon"));
    assert!(message.contains("database_agent.style_icon"));
    assert!(message.contains("table does not exist"));
    assert!(Migrator::get_applied_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stored_rows_are_kept() {
    let db = predecessor_database().await;
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "INSERT INTO database_agent (name, style_icon) VALUES ('legacy', 'Umbrella')",
    ))
    .await
    .unwrap();

    run_migrations(&db).await.unwrap();

    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT style_icon FROM database_agent WHERE name = 'legacy'",
        ))
        .await
        .unwrap()
        .unwrap();
    let icon: String = row.try_get("", "style_icon").unwrap();
    assert_eq!(icon, "Umbrella");
}

#[tokio::test]
async fn test_down_is_refused() {
    let db = predecessor_database().await;
    run_migrations(&db).await.unwrap();

    let err = revert_last(&db).await.unwrap_err();

    assert!(err.to_string().contains("is irreversible"));
    let status = migration_status(&db).await.unwrap();
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, STORED_NAME);
    assert!(matches!(status[0].1, MigrationStatus::Applied));
}

#[tokio::test]
async fn test_status_before_up() {
    let db = predecessor_database().await;

    let status = migration_status(&db).await.unwrap();

    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, STORED_NAME);
    assert!(matches!(status[0].1, MigrationStatus::Pending));
}

#[test]
fn test_declarative_records_match_migrator() {
    let changes = changes().unwrap();
    let names: Vec<_> = Migrator::migrations()
        .iter()
        .map(|migration| migration.name().to_owned())
        .collect();

    assert_eq!(
        changes
            .iter()
            .map(|change| change.key.stored_name())
            .collect::<Vec<_>>(),
        names
    );
}
