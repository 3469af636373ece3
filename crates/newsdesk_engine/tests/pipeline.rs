use std::time::Duration;

use newsdesk_engine::{run_search, ApiSettings, NewsApi, ReqwestNewsApi, SearchError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri(),
        fetch_news_path: "/api/fetch_news".to_string(),
        process_news_path: "/api/process_news".to_string(),
        ..ApiSettings::default()
    }
}

fn api(server: &MockServer) -> ReqwestNewsApi {
    ReqwestNewsApi::new(settings(server)).expect("client")
}

#[tokio::test]
async fn search_chains_fetch_into_process_and_returns_data() {
    let server = MockServer::start().await;
    let articles = json!({ "articles": [{ "url": "https://example.com/a", "title": "A" }] });

    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .and(query_param("keyword", "election china"))
        .and(query_param("session_id", "sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/process_news"))
        .and(query_param("session_id", "sess-1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "data": articles })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [{ "id": 1, "title": "A", "keywords": ["vote"] }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let records = run_search(&api, "election china", "sess-1")
        .await
        .expect("search ok");

    assert_eq!(
        records,
        vec![json!({ "id": 1, "title": "A", "keywords": ["vote"] })]
    );
}

#[tokio::test]
async fn fetch_failure_skips_process_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/process_news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_search(&api(&server), "election", "s").await.unwrap_err();

    assert_eq!(err, SearchError::Fetch { status: 503 });
    assert_eq!(err.to_string(), "Failed to fetch news");
}

#[tokio::test]
async fn process_failure_discards_fetched_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/process_news"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = run_search(&api(&server), "election", "s").await.unwrap_err();

    assert_eq!(err, SearchError::Process { status: 500 });
    assert_eq!(err.to_string(), "Failed to process news");
}

#[tokio::test]
async fn malformed_fetch_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/process_news"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_search(&api(&server), "election", "s").await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn process_response_without_data_array_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/process_news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let err = run_search(&api(&server), "x", "s").await.unwrap_err();
    assert_eq!(
        err,
        SearchError::Decode("process response has no `data` field".to_string())
    );
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    };
    let api = ReqwestNewsApi::new(settings).expect("client");

    let err = api.fetch_news("x", "s").await.unwrap_err();
    assert_eq!(err, SearchError::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_news"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3,4,5,6,7,8,9,10]"))
        .mount(&server)
        .await;

    let settings = ApiSettings {
        max_bytes: 8,
        ..settings(&server)
    };
    let api = ReqwestNewsApi::new(settings).expect("client");

    let err = api.fetch_news("x", "s").await.unwrap_err();
    assert_eq!(err, SearchError::TooLarge { max_bytes: 8 });
}

#[tokio::test]
async fn unparsable_base_url_is_reported() {
    let settings = ApiSettings {
        base_url: "not a url".to_string(),
        ..ApiSettings::default()
    };
    let api = ReqwestNewsApi::new(settings).expect("client");

    let err = api.fetch_news("x", "s").await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidUrl(_)), "got {err:?}");
}
