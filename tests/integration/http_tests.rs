//! HTTP API integration tests
//!
//! Drives the full actix application over an in-memory database.

#[cfg(test)]
mod tests {
    use crate::common::database::{test_config, test_state};
    use crate::common::{CutFile, Row};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use fonasa_registry::server::create_app;
    use serde_json::Value;

    const BOUNDARY: &str = "----registry-test-boundary";

    fn multipart_body(field: &str, filename: &str, content: &str) -> Vec<u8> {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: text/csv\r\n\r\n{content}\r\n--{b}--\r\n",
            b = BOUNDARY,
        )
        .into_bytes()
    }

    fn upload_request(field: &str, filename: &str, content: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/batches")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(field, filename, content))
    }

    fn sample_file() -> String {
        CutFile::new()
            .row(Row::new("11111111").outcome("Aceptado"))
            .row(Row::new("22222222").outcome("Rechazado").reason("Fallecido"))
            .row(Row::new("33333333").outcome("rechazado por X").reason("Fallecido"))
            .row(Row::new("44444444").outcome("").reason("Duplicado").newly_enrolled())
            .to_csv()
    }

    #[actix_web::test]
    async fn test_health_check() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"]["database"], true);
    }

    #[actix_web::test]
    async fn test_upload_and_query_flow() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = upload_request("file", "corte_junio.csv", &sample_file()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let batch: Value = test::read_body_json(resp).await;
        assert_eq!(batch["filename"], "corte_junio.csv");
        assert_eq!(batch["total_records"], 4);
        assert_eq!(batch["status"], "processed");
        let batch_id = batch["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/batches").to_request();
        let batches: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(batches.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/batches/{}", batch_id))
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["id"], batch_id.as_str());

        let req = test::TestRequest::get().uri("/api/records/stats").to_request();
        let tally: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(tally["accepted"], 1);
        assert_eq!(tally["rejected"], 2);

        let req = test::TestRequest::get()
            .uri(&format!("/api/records/stats?batch_id={}", batch_id))
            .to_request();
        let scoped: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(scoped, tally);

        let req = test::TestRequest::get().uri("/api/records/reasons").to_request();
        let reasons: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            reasons,
            serde_json::json!([
                {"reason": "Fallecido", "count": 2},
                {"reason": "Duplicado", "count": 1}
            ])
        );

        let req = test::TestRequest::get().uri("/api/records/all").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        let all = all.as_array().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0]["run"], "11111111");
        assert_eq!(all[0]["batch_filename"], "corte_junio.csv");

        let record_id = all[3]["id"].as_str().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/api/records/{}", record_id))
            .to_request();
        let record: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record["run"], "44444444");
        assert_eq!(record["newly_enrolled"], true);
        assert_eq!(record["rejection_reason"], "Duplicado");
    }

    #[actix_web::test]
    async fn test_record_listing_paginates_and_filters() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = upload_request("file", "corte.csv", &sample_file()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/records?page=2&page_size=3")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["items"].as_array().unwrap().len(), 1);
        assert_eq!(page["pagination"]["total"], 4);
        assert_eq!(page["pagination"]["pages"], 2);
        assert_eq!(page["pagination"]["has_next"], false);
        assert_eq!(page["pagination"]["has_prev"], true);

        let req = test::TestRequest::get()
            .uri("/api/records?newly_enrolled=yes")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["pagination"]["total"], 1);
        assert_eq!(page["items"][0]["run"], "44444444");

        let req = test::TestRequest::get()
            .uri("/api/records?search=2222")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["pagination"]["total"], 1);
    }

    #[actix_web::test]
    async fn test_delete_batch_then_not_found() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = upload_request("file", "corte.csv", &sample_file()).to_request();
        let batch: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/batches/{}", batch["id"].as_str().unwrap());

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NOT_FOUND");

        let req = test::TestRequest::get().uri("/api/records/all").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert!(all.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_without_file_field() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = upload_request("document", "corte.csv", &sample_file()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "MISSING_INPUT");

        let req = test::TestRequest::get().uri("/api/batches").to_request();
        let batches: Value = test::call_and_read_body_json(&app, req).await;
        assert!(batches.as_array().unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/records/all").to_request();
        let records: Value = test::call_and_read_body_json(&app, req).await;
        assert!(records.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_malformed_file() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let content = "RUN,DV\n1,K,extra\n";
        let req = upload_request("file", "roto.csv", content).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "PARSE_ERROR");

        let req = test::TestRequest::get().uri("/api/batches").to_request();
        let batches: Value = test::call_and_read_body_json(&app, req).await;
        assert!(batches.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_too_large() {
        let mut config = test_config();
        config.app.server.max_body_size = 64;
        let state = test_state(config).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = upload_request("file", "corte.csv", &sample_file()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_invalid_ids_are_not_found() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        for uri in ["/api/batches/not-a-uuid", "/api/records/not-a-uuid"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/api/records/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bad_query_parameters() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let cases = [
            "/api/records?newly_enrolled=maybe",
            "/api/records?page=0",
            "/api/records?page_size=5000",
            "/api/records?page=abc",
            "/api/records?page=18446744073709551615&page_size=1000",
            "/api/records?page=9223372036854777&page_size=1000",
            "/api/records/stats?batch_id=nope",
        ];
        for uri in cases {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "VALIDATION_ERROR", "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_empty_store_aggregates() {
        let state = test_state(test_config()).await;
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/records/stats").to_request();
        let tally: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(tally, serde_json::json!({"accepted": 0, "rejected": 0}));

        let req = test::TestRequest::get()
            .uri("/api/records/reasons")
            .to_request();
        let reasons: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reasons, serde_json::json!([]));
    }
}
