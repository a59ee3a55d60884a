use sea_orm_migration::migrator::MigratorTrait;
use sea_orm_migration::prelude::*;

pub mod change;
pub(crate) mod datatype;
pub(crate) mod ddl;
pub mod error;
pub mod runner;
pub mod state;

mod m0067_alter_agent_style_icon;

pub use change::{Operation, SchemaChange};
pub use error::MigrationError;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m0067_alter_agent_style_icon::Migration)]
    }
}

/// Declarative records of the chain, in the order `Migrator` applies them.
pub fn changes() -> Result<Vec<SchemaChange>, MigrationError> {
    Ok(vec![m0067_alter_agent_style_icon::change()?])
}
