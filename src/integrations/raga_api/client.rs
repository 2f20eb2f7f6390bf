// src/integrations/raga_api/client.rs
//
// RagaPro REST API client
//
// ARCHITECTURE:
// - One reqwest client shared by every repository trait
// - Maps backend JSON to domain records (NO business rules)
// - Non-2xx bodies become the error message, as the backend writes them
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never validates user input (services do that first)
// - Records are tagged with the tradition of the endpoint that produced them

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::domain::{
    FeedbackForm, LoginCredentials, RagaRecord, SessionFile, SignupForm, Tradition,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{
    AccountRepository, ArchiveRepository, LookupError, RagaBotRepository, RagaCatalog,
};

pub const UNEXPECTED_ARCHIVE_FORMAT: &str = "Unexpected data format from /Archive";
pub const MISSING_TOKEN_MESSAGE: &str = "Login failed: token missing.";

// ============================================================================
// WIRE TYPES
// ============================================================================

/// Archive row as the backend sends it. Any field may be null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveEntryWire {
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
    #[serde(default)]
    file_data: Option<String>,
}

impl ArchiveEntryWire {
    fn into_session_file(self) -> Option<SessionFile> {
        let file_data = self.file_data.filter(|data| !data.is_empty())?;
        Some(SessionFile {
            file_name: self.file_name.unwrap_or_default(),
            file_type: self.file_type.unwrap_or_default(),
            file_data: Some(file_data),
        })
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct RagaBotRequest<'a> {
    message: &'a str,
}

/// The bot answers in `answer`; older deployments used `message`
#[derive(Debug, Default, Deserialize)]
struct RagaBotResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl RagaBotResponse {
    fn into_text(self) -> String {
        self.answer.or(self.message).unwrap_or_default()
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// HTTP client for the RagaPro backend
pub struct RagaApiClient {
    base_url: Url,
    http_client: Client,
}

impl RagaApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| AppError::Config(format!("Invalid api_base_url: {}", e)))?;

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus percent-encoded path segments
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        build_endpoint(&self.base_url, segments)
    }

    /// Path of a raga lookup for `tradition`
    pub fn raga_endpoint(&self, tradition: Tradition, name: &str) -> AppResult<Url> {
        self.endpoint(&[catalog_segment(tradition), name])
    }

    async fn get_json(&self, url: Url) -> AppResult<Value> {
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

fn build_endpoint(base_url: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("API base URL cannot be a base: {}", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn catalog_segment(tradition: Tradition) -> &'static str {
    match tradition {
        Tradition::Carnatic => "raga",
        Tradition::Hindustani => "HindustaniRaga",
    }
}

/// Error text for a non-2xx response: the body if it has any, else the status
pub fn failure_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        trimmed.to_string()
    }
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::Backend {
        status: status.as_u16(),
        message: failure_message(status, &body),
    })
}

/// Split a lookup failure into not-found and everything else
fn lookup_error(error: AppError) -> LookupError {
    match error {
        AppError::Backend { status, message } if status == StatusCode::NOT_FOUND.as_u16() => {
            LookupError::NotFound(message)
        }
        other => LookupError::Transport(other.user_message()),
    }
}

/// Decode `/Archive/with-data`. Rows without data are dropped.
fn decode_archive(value: Value) -> AppResult<Vec<SessionFile>> {
    let Value::Array(rows) = value else {
        return Err(AppError::Other(UNEXPECTED_ARCHIVE_FORMAT.to_string()));
    };

    rows.into_iter()
        .map(|row| {
            serde_json::from_value::<ArchiveEntryWire>(row)
                .map_err(|_| AppError::Other(UNEXPECTED_ARCHIVE_FORMAT.to_string()))
        })
        .filter_map(|entry| entry.map(ArchiveEntryWire::into_session_file).transpose())
        .collect()
}

/// Decode a RagaBot reply. The body must be JSON; a JSON value without
/// `answer` or `message` is an empty answer.
fn decode_ragabot(body: &str) -> AppResult<String> {
    let value: Value = serde_json::from_str(body)?;
    let reply: RagaBotResponse = serde_json::from_value(value).unwrap_or_default();
    Ok(reply.into_text())
}

// ============================================================================
// REPOSITORY IMPLEMENTATIONS
// ============================================================================

#[async_trait]
impl RagaCatalog for RagaApiClient {
    async fn lookup(&self, tradition: Tradition, name: &str) -> Result<RagaRecord, LookupError> {
        let url = self
            .raga_endpoint(tradition, name)
            .map_err(|e| LookupError::Transport(e.user_message()))?;

        log::debug!(
            "event=catalog_request module=raga_api tradition={} url={}",
            tradition,
            url
        );

        let body = self.get_json(url).await.map_err(lookup_error)?;

        RagaRecord::from_json(tradition, body).map_err(|e| {
            LookupError::Transport(format!("Unexpected {} record: {}", tradition.label(), e))
        })
    }
}

#[async_trait]
impl ArchiveRepository for RagaApiClient {
    async fn list_with_data(&self) -> AppResult<Vec<SessionFile>> {
        let url = self.endpoint(&["Archive", "with-data"])?;
        let body = self.get_json(url).await?;
        decode_archive(body)
    }
}

#[async_trait]
impl AccountRepository for RagaApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<String> {
        let url = self.endpoint(&["auth", "login"])?;
        let response = self.http_client.post(url).json(credentials).send().await?;
        let response = ensure_success(response).await?;

        let login: LoginResponse = response.json().await?;
        login
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()))
    }

    async fn signup(&self, form: &SignupForm) -> AppResult<()> {
        let url = self.endpoint(&["user", "signup"])?;
        let response = self.http_client.post(url).json(form).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn submit_feedback(&self, form: &FeedbackForm, token: &str) -> AppResult<()> {
        let url = self.endpoint(&["feedback", "submit"])?;
        let response = self
            .http_client
            .post(url)
            .bearer_auth(token)
            .json(form)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl RagaBotRepository for RagaApiClient {
    async fn ask(&self, message: &str) -> AppResult<String> {
        let url = self.endpoint(&["RagaBot"])?;
        let response = self
            .http_client
            .post(url)
            .json(&RagaBotRequest { message })
            .send()
            .await?;
        let response = ensure_success(response).await?;

        decode_ragabot(&response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RagaApiClient {
        RagaApiClient::new(&AppConfig {
            api_base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client("https://localhost:44308/api");
        assert_eq!(client.base_url().as_str(), "https://localhost:44308/api");
    }

    #[test]
    fn test_raga_endpoints_per_tradition() {
        let client = client("https://localhost:44308/api");
        assert_eq!(
            client.raga_endpoint(Tradition::Carnatic, "Kalyani").unwrap().as_str(),
            "https://localhost:44308/api/raga/Kalyani"
        );
        assert_eq!(
            client.raga_endpoint(Tradition::Hindustani, "Miyan ki Malhar").unwrap().as_str(),
            "https://localhost:44308/api/HindustaniRaga/Miyan%20ki%20Malhar"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = client("http://raga.local/api/");
        assert_eq!(
            client.endpoint(&["Archive", "with-data"]).unwrap().as_str(),
            "http://raga.local/api/Archive/with-data"
        );
    }

    #[test]
    fn test_failure_message_prefers_body() {
        assert_eq!(failure_message(StatusCode::NOT_FOUND, "Raga not found"), "Raga not found");
        assert_eq!(failure_message(StatusCode::BAD_GATEWAY, "  "), "HTTP 502");
        assert_eq!(failure_message(StatusCode::NOT_FOUND, ""), "HTTP 404");
    }

    #[test]
    fn test_lookup_error_mapping() {
        let not_found = lookup_error(AppError::Backend {
            status: 404,
            message: "HTTP 404".to_string(),
        });
        assert_eq!(not_found, LookupError::NotFound("HTTP 404".to_string()));

        let server = lookup_error(AppError::Backend {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(server, LookupError::Transport("boom".to_string()));
    }

    #[test]
    fn test_decode_archive_filters_and_defaults() {
        let body = json!([
            { "fileName": "Alapana.mp3", "fileType": null, "fileData": "https://cdn.example.org/a.mp3" },
            { "fileName": "Notes.pdf", "fileType": "pdf", "fileData": null },
            { "fileName": "Empty.pdf", "fileType": "pdf", "fileData": "" },
            { "fileName": "Kriti.mp4", "fileType": "video", "fileData": "AAAA" }
        ]);

        let files = decode_archive(body).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "Alapana.mp3");
        assert_eq!(files[0].file_type, "");
        assert_eq!(files[1].file_type, "video");
    }

    #[test]
    fn test_decode_archive_rejects_non_array() {
        let result = decode_archive(json!({ "items": [] }));
        assert!(matches!(result, Err(AppError::Other(msg)) if msg == UNEXPECTED_ARCHIVE_FORMAT));
    }

    #[test]
    fn test_ragabot_reply_fallbacks() {
        let reply: RagaBotResponse =
            serde_json::from_value(json!({ "answer": "Kalyani is the 65th melakarta." })).unwrap();
        assert_eq!(reply.into_text(), "Kalyani is the 65th melakarta.");

        let reply: RagaBotResponse = serde_json::from_value(json!({ "message": "hi" })).unwrap();
        assert_eq!(reply.into_text(), "hi");

        assert_eq!(RagaBotResponse::default().into_text(), "");
    }

    #[test]
    fn test_ragabot_body_must_be_json() {
        assert_eq!(decode_ragabot(r#"{"answer":"Yes"}"#).unwrap(), "Yes");
        assert_eq!(decode_ragabot(r#""plain string""#).unwrap(), "");

        let error = decode_ragabot("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(error, AppError::Serialization(_)));
    }
}
