use std::time::Duration;

use futures_util::StreamExt;
use news_logging::news_debug;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use url::Url;

use crate::{EngineError, SearchError};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub fetch_news_path: String,
    pub process_news_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            fetch_news_path: "/fetch-news".to_string(),
            process_news_path: "/process-news".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ApiSettings {
    /// Base url and path are concatenated verbatim, then parsed.
    fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|err| SearchError::InvalidUrl(format!("{raw}: {err}")))
    }
}

/// The two remote calls a search is made of.
#[async_trait::async_trait]
pub trait NewsApi: Send + Sync {
    /// `GET {fetch}?keyword=..&session_id=..`, returning the decoded JSON body.
    async fn fetch_news(&self, query: &str, session_id: &str) -> Result<Value, SearchError>;

    /// `POST {process}?session_id=..` with `{"data": raw}`, returning the decoded JSON body.
    async fn process_news(&self, raw: Value, session_id: &str) -> Result<Value, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNewsApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestNewsApi {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| EngineError::Client(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    async fn read_json(&self, response: reqwest::Response) -> Result<Value, SearchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::TooLarge { max_bytes });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(SearchError::TooLarge { max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes).map_err(|err| SearchError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl NewsApi for ReqwestNewsApi {
    async fn fetch_news(&self, query: &str, session_id: &str) -> Result<Value, SearchError> {
        let mut url = self.settings.endpoint(&self.settings.fetch_news_path)?;
        url.query_pairs_mut()
            .append_pair("keyword", query)
            .append_pair("session_id", session_id);
        news_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Fetch {
                status: status.as_u16(),
            });
        }
        self.read_json(response).await
    }

    async fn process_news(&self, raw: Value, session_id: &str) -> Result<Value, SearchError> {
        let mut url = self.settings.endpoint(&self.settings.process_news_path)?;
        url.query_pairs_mut().append_pair("session_id", session_id);
        let body = serde_json::to_vec(&json!({ "data": raw }))
            .map_err(|err| SearchError::Decode(err.to_string()))?;
        news_debug!("POST {} body_len={}", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Process {
                status: status.as_u16(),
            });
        }
        self.read_json(response).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }
    SearchError::Network(err.to_string())
}
