use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::{BoundaryError, ErrorBody, RecordPayload, RecordStore};
use crate::dataset::{PersistedRecord, RemoteId};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`RecordStore`] backed by the REST endpoints under a base URL:
///
/// | Method | Path | Purpose |
/// |--------|------|---------|
/// | GET | `/records` | list |
/// | GET | `/records/{id}/exists` | existence check |
/// | POST | `/records` | create |
/// | PUT | `/records/{id}` | update |
/// | DELETE | `/records/{id}` | delete |
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    /// Create a store with the default timeout
    pub fn new(base_url: &str) -> Result<Self, BoundaryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a store with an explicit request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, BoundaryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self) -> String {
        format!("{}/records", self.base_url)
    }

    fn record_url(&self, id: RemoteId) -> String {
        format!("{}/records/{}", self.base_url, id)
    }
}

impl RecordStore for HttpRecordStore {
    fn list(&self) -> Result<Vec<PersistedRecord>, BoundaryError> {
        let url = self.records_url();
        debug!("GET {}", url);
        let response = self.client.get(url).header(ACCEPT, "application/json").send()?;
        Ok(check(response)?.json()?)
    }

    fn exists(&self, id: RemoteId) -> Result<bool, BoundaryError> {
        let url = format!("{}/exists", self.record_url(id));
        debug!("GET {}", url);
        let response = self.client.get(url).header(ACCEPT, "application/json").send()?;
        Ok(check(response)?.json()?)
    }

    fn create(&self, payload: &RecordPayload<'_>) -> Result<PersistedRecord, BoundaryError> {
        let url = self.records_url();
        debug!("POST {} ({} points)", url, payload.x.len());
        let response = self.client.post(url).json(payload).send()?;
        Ok(check(response)?.json()?)
    }

    fn update(
        &self,
        id: RemoteId,
        payload: &RecordPayload<'_>,
    ) -> Result<PersistedRecord, BoundaryError> {
        let url = self.record_url(id);
        debug!("PUT {} ({} points)", url, payload.x.len());
        let response = self.client.put(url).json(payload).send()?;
        Ok(check(response)?.json()?)
    }

    fn delete(&self, id: RemoteId) -> Result<(), BoundaryError> {
        let url = self.record_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send()?;
        check(response)?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into [`BoundaryError::Status`]
fn check(response: Response) -> Result<Response, BoundaryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("json"))
        .unwrap_or(false);

    let status_text = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string());

    let body = if is_json {
        response
            .json::<serde_json::Value>()
            .map(ErrorBody::Json)
            .unwrap_or(ErrorBody::Text(status_text))
    } else {
        ErrorBody::Text(status_text)
    };

    Err(BoundaryError::Status {
        status: status.as_u16(),
        body,
    })
}
