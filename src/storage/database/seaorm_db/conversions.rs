//! Entity <-> domain model conversions

use crate::core::models::{Batch, BatchStatus, Record, RecordFlags, RecordView};
use crate::utils::error::RegistryError;
use chrono::Utc;
use sea_orm::ActiveValue::Set;

use super::super::entities::{batch, record};

impl TryFrom<batch::Model> for Batch {
    type Error = RegistryError;

    fn try_from(model: batch::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<BatchStatus>()
            .map_err(RegistryError::internal)?;
        Ok(Batch {
            id: model.id,
            filename: model.filename,
            cut_date: model.cut_date,
            total_records: model.total_records,
            status,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

impl From<record::Model> for Record {
    fn from(model: record::Model) -> Self {
        Record {
            id: model.id,
            batch_id: model.batch_id,
            row_number: model.row_number,
            run: model.run,
            check_digit: model.check_digit,
            first_names: model.first_names,
            paternal_surname: model.paternal_surname,
            maternal_surname: model.maternal_surname,
            birth_date: model.birth_date,
            gender: model.gender,
            tier: model.tier,
            cut_date: model.cut_date,
            facility_code: model.facility_code,
            facility_name: model.facility_name,
            origin_facility_code: model.origin_facility_code,
            origin_facility_name: model.origin_facility_name,
            origin_commune_code: model.origin_commune_code,
            origin_commune_name: model.origin_commune_name,
            destination_facility_code: model.destination_facility_code,
            destination_facility_name: model.destination_facility_name,
            destination_commune_code: model.destination_commune_code,
            destination_commune_name: model.destination_commune_name,
            flags: RecordFlags {
                transferred_in: model.transferred_in,
                transferred_out: model.transferred_out,
                newly_enrolled: model.newly_enrolled,
                previously_blocked: model.previously_blocked,
                rejected_ineligible: model.rejected_ineligible,
                rejected_deceased: model.rejected_deceased,
                authorized: model.authorized,
            },
            outcome: model.outcome,
            rejection_reason: model.rejection_reason,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<Record> for record::ActiveModel {
    fn from(r: Record) -> Self {
        record::ActiveModel {
            id: Set(r.id),
            batch_id: Set(r.batch_id),
            row_number: Set(r.row_number),
            run: Set(r.run),
            check_digit: Set(r.check_digit),
            first_names: Set(r.first_names),
            paternal_surname: Set(r.paternal_surname),
            maternal_surname: Set(r.maternal_surname),
            birth_date: Set(r.birth_date),
            gender: Set(r.gender),
            tier: Set(r.tier),
            cut_date: Set(r.cut_date),
            facility_code: Set(r.facility_code),
            facility_name: Set(r.facility_name),
            origin_facility_code: Set(r.origin_facility_code),
            origin_facility_name: Set(r.origin_facility_name),
            origin_commune_code: Set(r.origin_commune_code),
            origin_commune_name: Set(r.origin_commune_name),
            destination_facility_code: Set(r.destination_facility_code),
            destination_facility_name: Set(r.destination_facility_name),
            destination_commune_code: Set(r.destination_commune_code),
            destination_commune_name: Set(r.destination_commune_name),
            transferred_in: Set(r.flags.transferred_in),
            transferred_out: Set(r.flags.transferred_out),
            newly_enrolled: Set(r.flags.newly_enrolled),
            previously_blocked: Set(r.flags.previously_blocked),
            rejected_ineligible: Set(r.flags.rejected_ineligible),
            rejected_deceased: Set(r.flags.rejected_deceased),
            authorized: Set(r.flags.authorized),
            outcome: Set(r.outcome),
            rejection_reason: Set(r.rejection_reason),
            created_at: Set(r.created_at.into()),
        }
    }
}

/// Join a record with its owning batch into the listing view
pub(super) fn record_view((model, batch): (record::Model, Option<batch::Model>)) -> RecordView {
    RecordView {
        record: model.into(),
        batch_filename: batch.map(|b| b.filename).unwrap_or_default(),
    }
}
