// file: tests/end_to_end.rs
// description: search and export flows against a local stub of the search API

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use search_client::ui::messages;
use search_client::{
    Config, DownloadOutcome, ExportFormat, FileSaver, HttpSearchApi, MemoryView, ResultArea,
    SearchClient, SubmitOutcome,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const CSV_BODY: &[u8] = b"rank,title,url,snippet\r\n1,A,https://a.example,first\r\n";

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Recorded {
    fn take(&self) -> Vec<(String, Value)> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

async fn search(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded
        .requests
        .lock()
        .unwrap()
        .push(("/search".to_string(), body.clone()));

    match body["query"].as_str().unwrap_or_default() {
        "rust ownership" => Json(json!({
            "results": [
                {
                    "rank": 1,
                    "url": "https://doc.rust-lang.org/book/ch04-01-what-is-ownership.html",
                    "title": "What is Ownership?",
                    "snippet": "Ownership is a set of rules that govern memory."
                },
                { "rank": 2, "url": "https://example.com/borrowing", "title": null }
            ]
        }))
        .into_response(),
        "single" => Json(json!({
            "results": [{ "rank": 1, "url": "https://single.example", "title": "Only" }]
        }))
        .into_response(),
        "xyz" => Json(json!({ "results": [] })).into_response(),
        "null results" => Json(json!({ "results": null })).into_response(),
        "partial hits" => Json(json!({
            "results": [
                {
                    "rank": 1,
                    "url": "https://a.example",
                    "title": "A",
                    "snippet": "first"
                },
                { "rank": 2, "url": null, "title": "B", "snippet": null },
                { "rank": 3, "url": "https://c.example", "title": null, "snippet": null }
            ]
        }))
        .into_response(),
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({})).into_response(),
    }
}

async fn download(
    State(recorded): State<Recorded>,
    Path(format): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    recorded
        .requests
        .lock()
        .unwrap()
        .push((format!("/download/{}", format), body));

    match format.as_str() {
        "csv" => ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], CSV_BODY).into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn spawn_server() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/search", post(search))
        .route("/download/{format}", post(download))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

fn client_for(
    base_url: &str,
    output: &TempDir,
) -> SearchClient<HttpSearchApi, MemoryView, FileSaver> {
    let mut config = Config::default_config();
    config.api.base_url = base_url.to_string();
    config.api.timeout_secs = 5;

    let api = HttpSearchApi::new(&config.api).unwrap();
    SearchClient::new(api, MemoryView::default(), FileSaver::new(output.path()))
}

#[tokio::test]
async fn search_renders_ranked_results() {
    let (base, recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("rust ownership");
    assert_eq!(client.submit().await, SubmitOutcome::Rendered(2));

    assert_eq!(
        recorded.take(),
        vec![("/search".to_string(), json!({ "query": "rust ownership" }))]
    );

    let view = client.view();
    let ResultArea::Items(items) = &view.area else {
        panic!("expected results, got {:?}", view.area);
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].rank, 1);
    assert_eq!(
        items[0].href,
        "https://doc.rust-lang.org/book/ch04-01-what-is-ownership.html"
    );
    assert_eq!(items[1].rank, 2);
    assert_eq!(items[1].label, messages::UNTITLED);
    assert_eq!(items[1].snippet, "");
    assert!(view.controls.export_json);
    assert!(view.controls.export_csv);
}

#[tokio::test]
async fn whitespace_query_sends_nothing() {
    let (base, recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("   ");
    assert_eq!(client.submit().await, SubmitOutcome::Ignored);

    assert!(recorded.take().is_empty());
    assert_eq!(client.view().presents, 0);
    assert_eq!(client.view().area, ResultArea::Empty);
}

#[tokio::test]
async fn empty_and_missing_results_show_nothing_found() {
    let (base, _recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    for query in ["xyz", "no results field", "null results"] {
        client.set_input("rust ownership");
        client.submit().await;
        assert!(client.controls().export_json);

        client.set_input(query);
        assert_eq!(client.submit().await, SubmitOutcome::Rendered(0));
        assert_eq!(
            client.view().area.status_text(),
            Some(messages::NOTHING_FOUND)
        );
        assert!(!client.view().controls.export_json);
        assert!(!client.view().controls.export_csv);
    }
}

#[tokio::test]
async fn null_fields_degrade_per_item() {
    let (base, _recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("partial hits");
    assert_eq!(client.submit().await, SubmitOutcome::Rendered(3));

    let ResultArea::Items(items) = &client.view().area else {
        panic!("expected results, got {:?}", client.view().area);
    };
    assert_eq!(items[0].href, "https://a.example");
    assert_eq!(items[0].snippet, "first");
    assert_eq!(items[1].rank, 2);
    assert_eq!(items[1].href, "");
    assert_eq!(items[1].label, "B");
    assert_eq!(items[1].snippet, "");
    assert_eq!(items[2].label, messages::UNTITLED);
    assert_eq!(items[2].snippet, "");
    assert!(client.controls().export_json);
    assert!(client.controls().export_csv);
}

#[tokio::test]
async fn second_search_replaces_blocks() {
    let (base, _recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("rust ownership");
    client.submit().await;
    client.set_input("single");
    client.submit().await;

    assert_eq!(client.view().area.block_count(), 1);
}

#[tokio::test]
async fn csv_export_saves_results_csv() {
    let (base, recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input(" foo ");
    let outcome = client.download(ExportFormat::Csv).await;

    let expected = output.path().join("results.csv");
    assert_eq!(outcome, DownloadOutcome::Saved(expected.clone()));
    assert_eq!(std::fs::read(&expected).unwrap(), CSV_BODY);
    assert_eq!(
        recorded.take(),
        vec![("/download/csv".to_string(), json!({ "query": "foo" }))]
    );
    assert!(client.view().alerts.is_empty());

    let leftovers: Vec<_> = std::fs::read_dir(output.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[tokio::test]
async fn failed_json_export_alerts_without_saving() {
    let (base, _recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("foo");
    assert_eq!(
        client.download(ExportFormat::Json).await,
        DownloadOutcome::Failed
    );

    assert_eq!(
        client.view().alerts,
        vec![messages::DOWNLOAD_FAILED.to_string()]
    );
    assert!(!output.path().join("results.json").exists());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn export_without_query_prompts() {
    let (base, recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    assert_eq!(
        client.download(ExportFormat::Csv).await,
        DownloadOutcome::NeedsQuery
    );
    assert!(recorded.take().is_empty());
    assert_eq!(
        client.view().alerts,
        vec![messages::ENTER_QUERY_FIRST.to_string()]
    );
}

#[tokio::test]
async fn server_error_shows_generic_message() {
    let (base, _recorded) = spawn_server().await;
    let output = TempDir::new().unwrap();
    let mut client = client_for(&base, &output);

    client.set_input("boom");
    assert_eq!(client.submit().await, SubmitOutcome::Failed);
    assert_eq!(client.view().area.status_text(), Some(messages::SEARCH_FAILED));
    assert!(!client.view().controls.export_json);
}

#[tokio::test]
async fn unreachable_server_shows_generic_message() {
    let output = TempDir::new().unwrap();
    let mut client = client_for("http://127.0.0.1:1", &output);

    client.set_input("rust ownership");
    client.render(&[search_client::ResultItem::new(1, "https://stale.example")]);
    assert!(client.controls().export_csv);

    assert_eq!(client.submit().await, SubmitOutcome::Failed);
    assert_eq!(client.view().area.status_text(), Some(messages::SEARCH_FAILED));
    assert!(!client.view().controls.export_json);
    assert!(!client.view().controls.export_csv);
    assert!(client.view().controls.submit);
}
