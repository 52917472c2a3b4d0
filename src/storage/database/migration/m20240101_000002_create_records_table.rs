use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let text = |column: Records| ColumnDef::new(column).string().not_null().default("").to_owned();
        let single_char = |column: Records| {
            ColumnDef::new(column)
                .string_len(1)
                .not_null()
                .default("")
                .to_owned()
        };
        let flag = |column: Records| {
            ColumnDef::new(column)
                .boolean()
                .not_null()
                .default(false)
                .to_owned()
        };

        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Records::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Records::BatchId).uuid().not_null())
                    .col(ColumnDef::new(Records::RowNumber).integer().not_null())
                    .col(ColumnDef::new(Records::Run).string().not_null())
                    .col(single_char(Records::CheckDigit))
                    .col(text(Records::FirstNames))
                    .col(text(Records::PaternalSurname))
                    .col(text(Records::MaternalSurname))
                    .col(ColumnDef::new(Records::BirthDate).date().not_null())
                    .col(single_char(Records::Gender))
                    .col(text(Records::Tier))
                    .col(ColumnDef::new(Records::CutDate).date().not_null())
                    .col(text(Records::FacilityCode))
                    .col(text(Records::FacilityName))
                    .col(text(Records::OriginFacilityCode))
                    .col(text(Records::OriginFacilityName))
                    .col(text(Records::OriginCommuneCode))
                    .col(text(Records::OriginCommuneName))
                    .col(text(Records::DestinationFacilityCode))
                    .col(text(Records::DestinationFacilityName))
                    .col(text(Records::DestinationCommuneCode))
                    .col(text(Records::DestinationCommuneName))
                    .col(flag(Records::TransferredIn))
                    .col(flag(Records::TransferredOut))
                    .col(flag(Records::NewlyEnrolled))
                    .col(flag(Records::PreviouslyBlocked))
                    .col(flag(Records::RejectedIneligible))
                    .col(flag(Records::RejectedDeceased))
                    .col(flag(Records::Authorized))
                    .col(text(Records::Outcome))
                    .col(ColumnDef::new(Records::RejectionReason).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Records::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_records_batch_id")
                            .from(Records::Table, Records::BatchId)
                            .to(Batches::Table, Batches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let indexes: [(&str, Vec<Records>); 7] = [
            ("idx_records_run_check_digit", vec![Records::Run, Records::CheckDigit]),
            ("idx_records_cut_date", vec![Records::CutDate]),
            ("idx_records_facility_code", vec![Records::FacilityCode]),
            ("idx_records_newly_enrolled", vec![Records::NewlyEnrolled]),
            ("idx_records_transferred_in", vec![Records::TransferredIn]),
            ("idx_records_transferred_out", vec![Records::TransferredOut]),
            ("idx_records_batch_id", vec![Records::BatchId]),
        ];
        for (name, columns) in indexes {
            let mut index = Index::create();
            index.if_not_exists().name(name).table(Records::Table);
            for column in columns {
                index.col(column);
            }
            manager.create_index(index.to_owned()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Records::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Records {
    Table,
    Id,
    BatchId,
    RowNumber,
    Run,
    CheckDigit,
    FirstNames,
    PaternalSurname,
    MaternalSurname,
    BirthDate,
    Gender,
    Tier,
    CutDate,
    FacilityCode,
    FacilityName,
    OriginFacilityCode,
    OriginFacilityName,
    OriginCommuneCode,
    OriginCommuneName,
    DestinationFacilityCode,
    DestinationFacilityName,
    DestinationCommuneCode,
    DestinationCommuneName,
    TransferredIn,
    TransferredOut,
    NewlyEnrolled,
    PreviouslyBlocked,
    RejectedIneligible,
    RejectedDeceased,
    Authorized,
    Outcome,
    RejectionReason,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
}
