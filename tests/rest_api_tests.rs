//! Integration tests for the catalogue REST API.
//!
//! Each test starts a real server on an ephemeral loopback port and talks
//! to it over HTTP:
//! - `/extensions` search semantics and wire shape
//! - `/install` echo behaviour
//! - Routing misses, unsupported methods and access logging
//! - Concurrent requests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

use extcat::{Catalogue, CatalogueServer, ServerConfig};

/// Starts a server with the built-in catalogue on an ephemeral port.
async fn start_server() -> CatalogueServer {
    CatalogueServer::start(&ServerConfig::with_port(0), Catalogue::builtin())
        .await
        .expect("Failed to start server")
}

/// Fetches a path and returns status + parsed JSON body.
async fn get_json(server: &CatalogueServer, path_and_query: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(format!("{}{}", server.url(), path_and_query))
        .await
        .expect("Request failed");
    let status = resp.status();
    let body = resp.json::<Value>().await.expect("Body is not JSON");
    (status, body)
}

/// Log sink shared between a test and its subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn full_catalogue_json() -> Value {
    serde_json::to_value(Catalogue::builtin().all()).unwrap()
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("Expected JSON array")
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// /extensions Tests
// ============================================================================

mod extensions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_no_query_returns_full_catalogue() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/extensions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, full_catalogue_json());
    }

    #[tokio::test]
    async fn test_blank_query_returns_full_catalogue() {
        let server = start_server().await;

        let (_, empty) = get_json(&server, "/extensions?q=").await;
        let (_, blank) = get_json(&server, "/extensions?q=%20%20%20").await;

        assert_eq!(empty, full_catalogue_json());
        assert_eq!(blank, full_catalogue_json());
    }

    #[tokio::test]
    async fn test_json_headers() {
        let server = start_server().await;
        let resp = reqwest::get(format!("{}/extensions?q=mesh", server.url()))
            .await
            .unwrap();

        let content_type = resp.headers()[reqwest::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let content_length: usize = resp.headers()[reqwest::header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(
            resp.headers()[reqwest::header::CONNECTION].to_str().unwrap(),
            "close"
        );

        let bytes = resp.bytes().await.unwrap();
        assert_eq!(content_length, bytes.len());
    }

    #[tokio::test]
    async fn test_records_have_all_fields() {
        let server = start_server().await;
        let (_, body) = get_json(&server, "/extensions").await;

        for record in body.as_array().unwrap() {
            let obj = record.as_object().unwrap();
            assert_eq!(obj.len(), 8, "Unexpected field set: {:?}", obj.keys());
            assert!(obj["id"].is_string());
            assert!(obj["name"].is_string());
            assert!(obj["version"].is_string());
            assert!(obj["author"].is_string());
            assert!(obj["description"].is_string());
            assert!(obj["tags"].is_array());
            assert!(obj["rating"].is_number());
            assert!(obj["installs"].is_u64());
        }
    }

    #[tokio::test]
    async fn test_no_match_returns_empty_array() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/extensions?q=nonexistent_zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let server = start_server().await;
        let (_, upper) = get_json(&server, "/extensions?q=MESH").await;
        let (_, lower) = get_json(&server, "/extensions?q=mesh").await;

        assert_eq!(upper, lower);
        assert!(ids(&lower).contains(&"salome.mesh".to_string()));
    }

    #[tokio::test]
    async fn test_search_by_author_encoded() {
        let server = start_server().await;
        let (_, body) = get_json(&server, "/extensions?q=EDF%20R%26D").await;

        assert_eq!(ids(&body), vec!["salome.smesh_algo", "salome.eficas"]);
    }

    #[tokio::test]
    async fn test_repeated_keyword_first_value_wins() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/extensions?q=slurm&q=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["salome.jobmanager"]);
    }

    #[tokio::test]
    async fn test_blank_keyword_before_real_one_is_skipped() {
        let server = start_server().await;
        let (_, body) = get_json(&server, "/extensions?q=&q=slurm").await;

        assert_eq!(ids(&body), vec!["salome.jobmanager"]);
    }
}

// ============================================================================
// /install Tests
// ============================================================================

mod install {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_install_echoes_id() {
        let server = start_server().await;
        let resp = reqwest::get(format!("{}/install?id=salome.mesh", server.url()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"status":"ok","id":"salome.mesh"}"#
        );
    }

    #[tokio::test]
    async fn test_install_without_id_is_unknown() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/install").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok", "id": "unknown"}));
    }

    #[tokio::test]
    async fn test_install_blank_id_is_unknown() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/install?id=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok", "id": "unknown"}));
    }

    #[tokio::test]
    async fn test_install_repeated_id_first_value_wins() {
        let server = start_server().await;
        let (_, body) = get_json(&server, "/install?id=salome.mesh&id=x").await;

        assert_eq!(body, serde_json::json!({"status": "ok", "id": "salome.mesh"}));
    }

    #[tokio::test]
    async fn test_install_unknown_extension_still_ok() {
        let server = start_server().await;
        let (status, body) = get_json(&server, "/install?id=no.such.thing").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "no.such.thing");
    }

    #[tokio::test]
    async fn test_install_does_not_change_catalogue() {
        let server = start_server().await;
        let (_, before) = get_json(&server, "/extensions").await;

        for _ in 0..3 {
            let (status, _) = get_json(&server, "/install?id=salome.mesh").await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, after) = get_json(&server, "/extensions").await;
        assert_eq!(before, after);
    }
}

// ============================================================================
// Routing Tests
// ============================================================================

mod routing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let server = start_server().await;

        for path in ["/unknown/path", "/", "/extensions/salome.mesh", "/installs"] {
            let resp = reqwest::get(format!("{}{}", server.url(), path))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_for_any_method() {
        let server = start_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/nope", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()[reqwest::header::CONNECTION].to_str().unwrap(),
            "close"
        );
    }

    #[tokio::test]
    async fn test_fallback_responses_are_access_logged() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = start_server().await;
        let resp = reqwest::Client::new()
            .post(format!("{}/nope", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let output = logs.contents();
        assert!(
            output.contains("POST /nope") && output.contains("404"),
            "Expected access log line, got: {}",
            output
        );
        assert!(output.contains("client=127.0.0.1:"), "got: {}", output);
    }

    #[tokio::test]
    async fn test_other_methods_not_implemented() {
        let server = start_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/extensions", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

        let resp = client
            .delete(format!("{}/install?id=salome.mesh", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

mod concurrency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_searches_agree() {
        let server = start_server().await;
        let url = format!("{}/extensions?q=cad", server.url());

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..50 {
            let url = url.clone();
            tasks.spawn(async move {
                let resp = reqwest::get(url).await.unwrap();
                assert_eq!(resp.status(), StatusCode::OK);
                resp.json::<Value>().await.unwrap()
            });
        }

        let expected = serde_json::to_value(Catalogue::builtin().search("cad")).unwrap();
        let mut completed = 0;
        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap(), expected);
            completed += 1;
        }
        assert_eq!(completed, 50);
    }
}
