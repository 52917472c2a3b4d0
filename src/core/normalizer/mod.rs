//! Row normalization
//!
//! Turns one raw CSV row into a fully typed [`Record`]. Normalization never
//! fails: malformed cells are replaced by defaults and reported as
//! [`FieldIssue`]s next to the record.

pub mod columns;
pub mod fields;
pub mod issues;
pub mod row;

pub use issues::{FieldIssue, IssueKind, summarize};
pub use row::{HeaderIndex, RawRow};

use crate::core::models::{Record, RecordFlags};
use chrono::{DateTime, NaiveDate, Utc};
use columns::*;
use fields::{first_char_upper, is_unexpected_flag, parse_birth_date, parse_flag};
use uuid::Uuid;

/// Batch-level values every record of an upload shares
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext {
    pub batch_id: Uuid,
    pub cut_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A normalized record plus the cells that had to be defaulted
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub record: Record,
    pub issues: Vec<FieldIssue>,
}

/// Row normalizer
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    birth_date_format: String,
}

impl Default for RowNormalizer {
    fn default() -> Self {
        Self::new("%d-%m-%Y")
    }
}

impl RowNormalizer {
    /// Create a normalizer reading birth dates with `birth_date_format`
    pub fn new(birth_date_format: impl Into<String>) -> Self {
        Self {
            birth_date_format: birth_date_format.into(),
        }
    }

    /// Normalize one row
    pub fn normalize(&self, row: &RawRow<'_>, ctx: &NormalizeContext) -> NormalizedRow {
        let mut issues = Vec::new();
        let row_number = row.row_number();

        let mut flag = |column: &'static str| {
            let raw = row.get(column);
            if is_unexpected_flag(raw) {
                issues.push(issue(row_number, column, raw, IssueKind::UnexpectedFlag));
            }
            parse_flag(raw)
        };
        let flags = RecordFlags {
            transferred_in: flag(TRASLADO_POSITIVO),
            transferred_out: flag(TRASLADO_NEGATIVO),
            newly_enrolled: flag(NUEVO_INSCRITO),
            previously_blocked: flag(EXBLOQUEADO),
            rejected_ineligible: flag(RECHAZADO_PREVISIONAL),
            rejected_deceased: flag(RECHAZADO_FALLECIDO),
            authorized: flag(AUTORIZADO),
        };

        for column in [DV, GENERO] {
            let raw = row.get(column);
            if raw.is_some_and(|v| v.trim().chars().count() > 1) {
                issues.push(issue(row_number, column, raw, IssueKind::Truncated));
            }
        }

        let raw_birth = row.get(FECHA_NACIMIENTO);
        let birth_date = parse_birth_date(raw_birth, &self.birth_date_format, ctx.cut_date);
        match raw_birth.map(str::trim) {
            None | Some("") => {
                issues.push(issue(row_number, FECHA_NACIMIENTO, raw_birth, IssueKind::MissingDate))
            }
            Some(v) if NaiveDate::parse_from_str(v, &self.birth_date_format).is_err() => {
                issues.push(issue(row_number, FECHA_NACIMIENTO, raw_birth, IssueKind::InvalidDate))
            }
            Some(_) => {}
        }

        let record = Record {
            id: Uuid::new_v4(),
            batch_id: ctx.batch_id,
            row_number: i32::try_from(row_number).unwrap_or(i32::MAX),
            run: row.get(RUN).map(|v| v.trim().to_string()).unwrap_or_default(),
            check_digit: first_char_upper(row.get(DV)),
            first_names: row.text(NOMBRES),
            paternal_surname: row.text(APELLIDO_PATERNO),
            maternal_surname: row.text(APELLIDO_MATERNO),
            birth_date,
            gender: first_char_upper(row.get(GENERO)),
            tier: row.text(TRAMO),
            cut_date: ctx.cut_date,
            facility_code: row.text(COD_CENTRO),
            facility_name: row.text(NOMBRE_CENTRO),
            origin_facility_code: row.text(CODIGO_CENTRO_PROCEDENCIA),
            origin_facility_name: row.text(NOMBRE_CENTRO_PROCEDENCIA),
            origin_commune_code: row.text(CODIGO_COMUNA_PROCEDENCIA),
            origin_commune_name: row.text(NOMBRE_COMUNA_PROCEDENCIA),
            destination_facility_code: row.text(CODIGO_CENTRO_DESTINO),
            destination_facility_name: row.text(NOMBRE_CENTRO_DESTINO),
            destination_commune_code: row.text(CODIGO_COMUNA_DESTINO),
            destination_commune_name: row.text(NOMBRE_COMUNA_DESTINO),
            flags,
            outcome: row.text(ACEPTADO_RECHAZADO),
            rejection_reason: row.text(MOTIVO),
            created_at: ctx.created_at,
        };

        NormalizedRow { record, issues }
    }
}

fn issue(row: usize, column: &'static str, raw: Option<&str>, kind: IssueKind) -> FieldIssue {
    FieldIssue {
        row,
        column,
        value: raw.unwrap_or_default().to_string(),
        kind,
    }
}
