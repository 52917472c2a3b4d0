//! Database integration tests
//!
//! Tests storage operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{RecordFactory, TestDatabase};
    use crate::common::database::test_db_config;
    use fonasa_registry::core::models::{BatchStatus, PageRequest, RecordFilter};
    use fonasa_registry::storage::database::Database;

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());
        let db = db.unwrap();

        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        let health = db.health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations can run twice
    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());

        let stats = db.db().stats().await.unwrap();
        assert_eq!(stats.batches, 0);
        assert_eq!(stats.records, 0);
    }

    #[tokio::test]
    async fn test_create_batch_with_records() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte.csv");
        let records = RecordFactory::records(&header, 3);

        let batch = db
            .db()
            .create_batch_with_records(header.clone(), records, 500)
            .await
            .unwrap();
        assert_eq!(batch.id, header.id);
        assert_eq!(batch.total_records, 3);
        assert_eq!(batch.status, BatchStatus::Processed);

        let stored = db.db().find_batch(header.id).await.unwrap().unwrap();
        assert_eq!(stored, batch);

        let all = db.db().all_records().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| r.batch_filename == "corte.csv"));
        let rows: Vec<i32> = all.iter().map(|r| r.record.row_number).collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    /// Records spanning several insert chunks are all persisted and listed
    #[tokio::test]
    async fn test_multi_chunk_insert_is_complete() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("grande.csv");
        let records = RecordFactory::records(&header, 1203);

        let batch = db
            .db()
            .create_batch_with_records(header, records, 500)
            .await
            .unwrap();
        assert_eq!(batch.total_records, 1203);

        let all = db.db().all_records().await.unwrap();
        assert_eq!(all.len(), 1203);
        assert_eq!(all.first().unwrap().record.row_number, 1);
        assert_eq!(all.last().unwrap().record.row_number, 1203);
    }

    /// A failing chunk rolls back the header and earlier chunks
    #[tokio::test]
    async fn test_failed_insert_persists_nothing() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("duplicado.csv");
        let mut records = RecordFactory::records(&header, 4);
        records[3].id = records[0].id;

        let result = db
            .db()
            .create_batch_with_records(header.clone(), records, 2)
            .await;
        assert!(result.is_err());

        assert!(db.db().find_batch(header.id).await.unwrap().is_none());
        let stats = db.db().stats().await.unwrap();
        assert_eq!(stats.batches, 0);
        assert_eq!(stats.records, 0);
    }

    #[tokio::test]
    async fn test_delete_batch_cascades_only_its_records() {
        let db = TestDatabase::new().await;
        let first = RecordFactory::batch("primero.csv");
        let second = RecordFactory::batch("segundo.csv");
        db.db()
            .create_batch_with_records(first.clone(), RecordFactory::records(&first, 2), 500)
            .await
            .unwrap();
        db.db()
            .create_batch_with_records(second.clone(), RecordFactory::records(&second, 3), 500)
            .await
            .unwrap();

        let removed = db.db().delete_batch(first.id).await.unwrap();
        assert_eq!(removed, Some(2));

        let remaining = db.db().all_records().await.unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|r| r.record.batch_id == second.id));
        assert!(db.db().find_batch(first.id).await.unwrap().is_none());

        assert_eq!(db.db().delete_batch(first.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_outcome_counts_ignore_case() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte.csv");
        let mut records = RecordFactory::records(&header, 4);
        for (record, outcome) in records
            .iter_mut()
            .zip(["Aceptado", "Rechazado", "rechazado por X", ""])
        {
            record.outcome = outcome.to_string();
        }
        db.db()
            .create_batch_with_records(header.clone(), records, 500)
            .await
            .unwrap();

        let accepted = db.db().count_outcomes_containing("acept", None).await.unwrap();
        let rejected = db.db().count_outcomes_containing("rechaz", None).await.unwrap();
        assert_eq!(accepted, 1);
        assert_eq!(rejected, 2);

        let scoped = db
            .db()
            .count_outcomes_containing("rechaz", Some(uuid::Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(scoped, 0);
    }

    /// LIKE wildcards inside a marker are matched literally
    #[tokio::test]
    async fn test_outcome_marker_wildcards_are_literal() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte.csv");
        let mut records = RecordFactory::records(&header, 2);
        records[0].outcome = "100% aceptado".to_string();
        records[1].outcome = "Aceptado".to_string();
        db.db()
            .create_batch_with_records(header, records, 500)
            .await
            .unwrap();

        assert_eq!(db.db().count_outcomes_containing("%", None).await.unwrap(), 1);
        assert_eq!(db.db().count_outcomes_containing("_", None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejection_reason_histogram() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte.csv");
        let mut records = RecordFactory::records(&header, 6);
        for (record, reason) in records.iter_mut().zip(["A", "A", "B", "", "C", "C"]) {
            record.rejection_reason = reason.to_string();
        }
        db.db()
            .create_batch_with_records(header.clone(), records, 500)
            .await
            .unwrap();

        let reasons = db.db().rejection_reason_counts(None).await.unwrap();
        let pairs: Vec<(&str, u64)> = reasons.iter().map(|r| (r.reason.as_str(), r.count)).collect();
        assert_eq!(pairs, vec![("A", 2), ("C", 2), ("B", 1)]);

        let scoped = db
            .db()
            .rejection_reason_counts(Some(uuid::Uuid::new_v4()))
            .await
            .unwrap();
        assert!(scoped.is_empty());
    }

    #[tokio::test]
    async fn test_list_records_filters_and_pages() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte.csv");
        let mut records = RecordFactory::records(&header, 5);
        records[0].first_names = "Maria Jose".to_string();
        records[1].paternal_surname = "MARIÑO".to_string();
        records[2].flags.newly_enrolled = true;
        records[2].facility_code = "202".to_string();
        records[3].run = "12345678".to_string();
        db.db()
            .create_batch_with_records(header.clone(), records, 500)
            .await
            .unwrap();

        let first_page = PageRequest { page: 1, page_size: 2 };
        let page = db
            .db()
            .list_records(&RecordFilter::default(), first_page)
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].record.row_number, 1);

        let last_page = PageRequest { page: 3, page_size: 2 };
        let page = db
            .db()
            .list_records(&RecordFilter::default(), last_page)
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].record.row_number, 5);

        let all = PageRequest { page: 1, page_size: 50 };
        let search = RecordFilter {
            search: Some("mari".to_string()),
            ..RecordFilter::default()
        };
        let page = db.db().list_records(&search, all).await.unwrap();
        assert_eq!(page.total, 2);

        let by_run = RecordFilter {
            search: Some("3456".to_string()),
            ..RecordFilter::default()
        };
        let page = db.db().list_records(&by_run, all).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].record.run, "12345678");

        let both_terms = RecordFilter {
            search: Some("maria jose".to_string()),
            ..RecordFilter::default()
        };
        assert_eq!(db.db().list_records(&both_terms, all).await.unwrap().total, 1);

        let enrolled = RecordFilter {
            newly_enrolled: Some(true),
            facility_code: Some("202".to_string()),
            ..RecordFilter::default()
        };
        let page = db.db().list_records(&enrolled, all).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].record.row_number, 3);

        let other_day = RecordFilter {
            cut_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1),
            ..RecordFilter::default()
        };
        assert_eq!(db.db().list_records(&other_day, all).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_find_record_joins_batch_filename() {
        let db = TestDatabase::new().await;
        let header = RecordFactory::batch("corte_junio.csv");
        let records = RecordFactory::records(&header, 1);
        let id = records[0].id;
        db.db()
            .create_batch_with_records(header, records, 500)
            .await
            .unwrap();

        let view = db.db().find_record(id).await.unwrap().unwrap();
        assert_eq!(view.batch_filename, "corte_junio.csv");
        assert_eq!(view.record.id, id);

        assert!(db.db().find_record(uuid::Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_batches_newest_first() {
        let db = TestDatabase::new().await;
        let mut older = RecordFactory::batch("viejo.csv");
        older.created_at = older.created_at - chrono::Duration::days(1);
        let newer = RecordFactory::batch("nuevo.csv");

        db.db()
            .create_batch_with_records(older, Vec::new(), 500)
            .await
            .unwrap();
        db.db()
            .create_batch_with_records(newer, Vec::new(), 500)
            .await
            .unwrap();

        let batches = db.db().list_batches().await.unwrap();
        let names: Vec<&str> = batches.iter().map(|b| b.filename.as_str()).collect();
        assert_eq!(names, vec!["nuevo.csv", "viejo.csv"]);
        assert_eq!(batches[1].total_records, 0);
    }
}
