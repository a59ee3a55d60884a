use sea_orm_migration::prelude::*;

use crate::change::{Operation, SchemaChange};
use crate::ddl;
use crate::error::MigrationError;
use crate::state::{CharField, MigrationKey};

pub(crate) const APP: &str = "database";
pub(crate) const NAME: &str = "0067_alter_agent_style_icon";
pub(crate) const DEPENDS_ON: &str = "0066_remove_agent_tools_agent_input_tools_and_more";

const STYLE_ICONS: [(&str, &str); 28] = [
    ("Lightbulb", "Lightbulb"),
    ("Health", "Health"),
    ("Robot", "Robot"),
    ("Aperture", "Aperture"),
    ("GraduationCap", "Graduation Cap"),
    ("Jeep", "Jeep"),
    ("Island", "Island"),
    ("MathOperations", "Math Operations"),
    ("Asclepius", "Asclepius"),
    ("Couch", "Couch"),
    ("Code", "Code"),
    ("Atom", "Atom"),
    ("ClockCounterClockwise", "Clock Counter Clockwise"),
    ("PencilLine", "Pencil Line"),
    ("Chalkboard", "Chalkboard"),
    ("Cigarette", "Cigarette"),
    ("CraneTower", "Crane Tower"),
    ("Heart", "Heart"),
    ("Leaf", "Leaf"),
    ("NewspaperClipping", "Newspaper Clipping"),
    ("OrangeSlice", "Orange Slice"),
    ("SmileyMelting", "Smiley Melting"),
    ("YinYang", "Yin Yang"),
    ("SneakerMove", "Sneaker Move"),
    ("Student", "Student"),
    ("Oven", "Oven"),
    ("Gavel", "Gavel"),
    ("Broadcast", "Broadcast"),
];

pub fn change() -> Result<SchemaChange, MigrationError> {
    Ok(SchemaChange {
        key: MigrationKey::parse(APP, NAME)?,
        dependencies: vec![MigrationKey::parse(APP, DEPENDS_ON)?],
        operations: vec![Operation::alter_field(
            "agent",
            "style_icon",
            CharField::new(200)
                .with_choices(STYLE_ICONS)
                .with_default("Lightbulb"),
        )],
    })
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        NAME
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let change = change()?;
        ddl::forward(&change, manager).await?;
        tracing::info!(migration = %change.key, "Migration up");
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        let change = change()?;
        tracing::warn!(migration = %change.key, "Refusing to migrate down");
        Err(MigrationError::IrreversibleChange {
            migration: change.key,
            reason: "previous column definition is not recorded in the database".to_owned(),
        }
        .into())
    }
}
