//! Beneficiary record model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The seven transfer/enrollment/authorization indicators of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFlags {
    pub transferred_in: bool,
    pub transferred_out: bool,
    pub newly_enrolled: bool,
    pub previously_blocked: bool,
    pub rejected_ineligible: bool,
    pub rejected_deceased: bool,
    pub authorized: bool,
}

/// One beneficiary entry within a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub batch_id: Uuid,
    /// 1-based position of the row in the source file
    pub row_number: i32,
    /// National ID number without check digit
    pub run: String,
    pub check_digit: String,
    pub first_names: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// Plan tier code
    pub tier: String,
    pub cut_date: NaiveDate,
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
    #[serde(flatten)]
    pub flags: RecordFlags,
    /// Free-text accepted/rejected label
    pub outcome: String,
    pub rejection_reason: String,
    pub created_at: DateTime<Utc>,
}

/// A record together with the filename of the batch that owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: Record,
    pub batch_filename: String,
}
