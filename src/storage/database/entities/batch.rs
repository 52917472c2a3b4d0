use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Uploaded cut file database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Batch ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Original filename of the upload
    pub filename: String,

    /// Logical snapshot date
    pub cut_date: Date,

    /// Number of records persisted
    pub total_records: i32,

    /// Processing status
    pub status: String,

    /// Batch creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Batch entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Records parsed from this batch
    #[sea_orm(has_many = "super::record::Entity")]
    Record,
}

impl Related<super::record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Record.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
