use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Beneficiary record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning batch
    pub batch_id: Uuid,

    /// 1-based data row in the source file
    pub row_number: i32,

    pub run: String,
    pub check_digit: String,
    pub first_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub birth_date: Date,
    pub gender: String,
    pub tier: String,

    /// Copy of the owning batch's cut-date
    pub cut_date: Date,

    pub facility_code: String,
    pub facility_name: String,
    pub origin_facility_code: String,
    pub origin_facility_name: String,
    pub origin_commune_code: String,
    pub origin_commune_name: String,
    pub destination_facility_code: String,
    pub destination_facility_name: String,
    pub destination_commune_code: String,
    pub destination_commune_name: String,

    pub transferred_in: bool,
    pub transferred_out: bool,
    pub newly_enrolled: bool,
    pub previously_blocked: bool,
    pub rejected_ineligible: bool,
    pub rejected_deceased: bool,
    pub authorized: bool,

    /// Accepted/rejected label as written in the file
    pub outcome: String,
    pub rejection_reason: String,

    pub created_at: DateTimeWithTimeZone,
}

/// Record entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to batch relation
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id",
        on_delete = "Cascade"
    )]
    Batch,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
