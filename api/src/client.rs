use std::future::Future;

use serde::Deserialize;
use serde_json::Value;

use crate::{ApiError, Endpoints, ReportKind};

/// One row of the `/users` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    pub user_id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Source of directory and report payloads.
///
/// Report payloads are handed back untyped: their shape depends on the
/// report kind and is validated by the consumer.
pub trait PresenceApi {
    fn fetch_directory(&self) -> impl Future<Output = Result<Vec<DirectoryEntry>, ApiError>>;

    fn fetch_report(
        &self,
        kind: ReportKind,
        user_id: u32,
    ) -> impl Future<Output = Result<Value, ApiError>>;
}

/// Browser client backed by `window.fetch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClient {
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl PresenceApi for HttpClient {
    async fn fetch_directory(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
        let body = get_json(&self.endpoints.users()).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_report(&self, kind: ReportKind, user_id: u32) -> Result<Value, ApiError> {
        get_json(&self.endpoints.report(kind, user_id)).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_json(url: &str) -> Result<Value, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    tracing::debug!(url, "GET");

    let transport = |message: String| ApiError::Transport {
        url: url.to_string(),
        message,
    };

    let window = web_sys::window().ok_or_else(|| transport("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| transport(js_message(&err)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| transport("fetch did not resolve to a Response".into()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().map_err(|err| transport(js_message(&err)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|err| transport(js_message(&err)))?;
    let body = text
        .as_string()
        .ok_or_else(|| transport("response body is not text".into()))?;

    Ok(serde_json::from_str(&body)?)
}

#[cfg(target_arch = "wasm32")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn get_json(url: &str) -> Result<Value, ApiError> {
    tracing::warn!(url, "no HTTP transport on this target");
    Err(ApiError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn directory_entry_accepts_null_avatar() {
        let entries: Vec<DirectoryEntry> = serde_json::from_value(json!([
            { "user_id": 10, "name": "Maciej Z.", "avatar": "https://intranet.example/api/images/users/10" },
            { "user_id": 11, "name": "anonymous", "avatar": null },
        ]))
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user_id, 10);
        assert!(entries[0].avatar.is_some());
        assert_eq!(entries[1].avatar, None);
    }

    #[test]
    fn native_client_reports_unsupported() {
        let client = HttpClient::default();
        let outcome = futures::executor::block_on(client.fetch_directory());
        assert!(matches!(outcome, Err(ApiError::Unsupported)));
    }
}
