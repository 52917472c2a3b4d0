//! Ingestion integration tests
//!
//! Runs the batch ingestor and query service against a real database.

#[cfg(test)]
mod tests {
    use crate::common::{CutFile, Row, TestDatabase};
    use chrono::NaiveDate;
    use fonasa_registry::config::{FieldPolicy, IngestConfig};
    use fonasa_registry::core::analytics::RegistryQueries;
    use fonasa_registry::core::ingest::{BatchIngestor, FixedClock};
    use fonasa_registry::core::models::{BatchStatus, ReasonCount, RecordFilter};
    use fonasa_registry::utils::error::RegistryError;
    use std::sync::Arc;

    fn cut_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn services(db: &TestDatabase, config: IngestConfig) -> (BatchIngestor, RegistryQueries) {
        let queries = RegistryQueries::new(db.store(), &config);
        let ingestor =
            BatchIngestor::new(db.store(), config).with_clock(Arc::new(FixedClock::on(cut_date())));
        (ingestor, queries)
    }

    #[tokio::test]
    async fn test_ingest_persists_every_row() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::accepted_rows(25).to_csv();

        let batch = ingestor.ingest("corte_junio.csv", csv.as_bytes()).await.unwrap();
        assert_eq!(batch.total_records, 25);
        assert_eq!(batch.status, BatchStatus::Processed);
        assert_eq!(batch.cut_date, cut_date());
        assert_eq!(batch.filename, "corte_junio.csv");

        let records = queries.all_records().await.unwrap();
        assert_eq!(records.len(), 25);
        assert!(records.iter().all(|r| r.record.batch_id == batch.id));
        assert!(records.iter().all(|r| r.record.cut_date == cut_date()));
        assert!(records.iter().all(|r| r.record.created_at == batch.created_at));
        assert_eq!(records[0].record.run, "10000000");
        assert_eq!(records[0].record.facility_name, "CESFAM 101");

        assert_eq!(queries.batch(batch.id).await.unwrap(), batch);
    }

    #[tokio::test]
    async fn test_small_chunks_store_all_rows() {
        let db = TestDatabase::new().await;
        let config = IngestConfig {
            insert_chunk_size: 7,
            ..IngestConfig::default()
        };
        let (ingestor, queries) = services(&db, config);
        let csv = CutFile::accepted_rows(50).to_csv();

        let batch = ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap();
        assert_eq!(batch.total_records, 50);
        assert_eq!(queries.all_records().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_malformed_file_persists_nothing() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let mut csv = CutFile::accepted_rows(3).to_csv();
        csv.push_str("1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,28\n");

        let err = ingestor.ingest("roto.csv", csv.as_bytes()).await.unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));

        assert!(queries.list_batches().await.unwrap().is_empty());
        assert!(queries.all_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_bad_dates() {
        let db = TestDatabase::new().await;
        let config = IngestConfig {
            field_policy: FieldPolicy::Strict,
            ..IngestConfig::default()
        };
        let (ingestor, queries) = services(&db, config);
        let csv = CutFile::new()
            .row(Row::new("11111111"))
            .row(Row::new("22222222").birth_date("31/02/1990"))
            .to_csv();

        let err = ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert!(queries.all_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lenient_policy_defaults_birth_date_to_cut_date() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::new()
            .row(Row::new("11111111"))
            .row(Row::new("22222222").birth_date("not a date"))
            .row(Row::new("33333333").birth_date(""))
            .to_csv();

        ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap();

        let records = queries.all_records().await.unwrap();
        let dates: Vec<NaiveDate> = records.iter().map(|r| r.record.birth_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(1985, 11, 7).unwrap(),
                cut_date(),
                cut_date()
            ]
        );
    }

    #[tokio::test]
    async fn test_header_only_file_creates_empty_batch() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::new().to_csv();

        let batch = ingestor.ingest("vacio.csv", csv.as_bytes()).await.unwrap();
        assert_eq!(batch.total_records, 0);
        assert_eq!(queries.list_batches().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tally_matches_outcome_substrings() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::new()
            .row(Row::new("1").outcome("Aceptado"))
            .row(Row::new("2").outcome("Rechazado"))
            .row(Row::new("3").outcome("rechazado por X"))
            .row(Row::new("4").outcome(""))
            .to_csv();

        let batch = ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap();

        let tally = queries.tally(None).await.unwrap();
        assert_eq!(tally.accepted, 1);
        assert_eq!(tally.rejected, 2);

        let scoped = queries.tally(Some(batch.id)).await.unwrap();
        assert_eq!(scoped, tally);
    }

    #[tokio::test]
    async fn test_rejection_reasons_skip_blank() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::new()
            .row(Row::new("1").reason("A"))
            .row(Row::new("2").reason("A"))
            .row(Row::new("3").reason("B"))
            .row(Row::new("4").reason(""))
            .to_csv();

        ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap();

        let reasons = queries.rejection_reasons(None).await.unwrap();
        assert_eq!(
            reasons,
            vec![
                ReasonCount {
                    reason: "A".to_string(),
                    count: 2
                },
                ReasonCount {
                    reason: "B".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_batch_removes_its_records() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let first = ingestor
            .ingest("uno.csv", CutFile::accepted_rows(4).to_csv().as_bytes())
            .await
            .unwrap();
        let second = ingestor
            .ingest("dos.csv", CutFile::accepted_rows(2).to_csv().as_bytes())
            .await
            .unwrap();

        ingestor.delete_batch(first.id).await.unwrap();

        let records = queries.all_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.record.batch_id == second.id));

        let err = ingestor.delete_batch(first.id).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
        assert!(matches!(
            queries.batch(first.id).await,
            Err(RegistryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_listing_filters_ingested_rows() {
        let db = TestDatabase::new().await;
        let (ingestor, queries) = services(&db, IngestConfig::default());
        let csv = CutFile::new()
            .row(Row::new("11111111").names("JUAN", "GONZALEZ"))
            .row(Row::new("22222222").names("PEDRO", "GONZALEZ").newly_enrolled())
            .row(Row::new("33333333").facility("303").transferred_in())
            .to_csv();
        ingestor.ingest("corte.csv", csv.as_bytes()).await.unwrap();

        let by_name = RecordFilter {
            search: Some("gonzalez".to_string()),
            ..RecordFilter::default()
        };
        let (page, request) = queries.list_records(&by_name, None, None).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(request.page_size, 50);

        let enrolled = RecordFilter {
            newly_enrolled: Some(true),
            ..RecordFilter::default()
        };
        let (page, _) = queries.list_records(&enrolled, None, None).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].record.run, "22222222");

        let moved = RecordFilter {
            transferred_in: Some(true),
            facility_code: Some("303".to_string()),
            ..RecordFilter::default()
        };
        let (page, _) = queries.list_records(&moved, None, None).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(page.items[0].record.flags.transferred_in);

        let err = queries
            .list_records(&RecordFilter::default(), Some(0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }
}
