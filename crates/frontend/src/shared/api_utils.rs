//! HTTP helpers for talking to the content repository.
//!
//! The repository is served from the same origin as the client, so paths
//! are used as-is. Every helper maps failures onto [`AppError`].

use crate::shared::error::{AppError, AppResult};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Origin of the current page, e.g. "https://cards.example.org".
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full URL from a repository path. Absolute URLs pass through.
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", api_base(), path)
    }
}

/// Turn a non-2xx response into [`AppError::Server`].
pub fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        log::warn!(
            "{} answered {} {}",
            response.url(),
            response.status(),
            response.status_text()
        );
        Err(AppError::server(response.status(), response.status_text()))
    }
}

/// GET a JSON document.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let response = ensure_ok(response)?;
    Ok(response.json::<T>().await?)
}

/// GET a JSON document without interpreting it.
pub async fn get_value(path: &str) -> AppResult<serde_json::Value> {
    get_json::<serde_json::Value>(path).await
}

/// POST a url-encoded form body. The status is left to the caller.
pub async fn post_form<B: Serialize>(path: &str, body: &B) -> AppResult<Response> {
    let url = api_url(path);
    let encoded = serde_qs::to_string(body).map_err(|e| AppError::Validation(e.to_string()))?;
    log::debug!("POST {} ({} bytes)", url, encoded.len());
    let response = Request::post(&url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(encoded)?
        .send()
        .await?;
    Ok(response)
}

/// POST with an empty body and decode the JSON reply.
pub async fn post_empty_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = Request::post(&url).send().await?;
    let response = ensure_ok(response)?;
    Ok(response.json::<T>().await?)
}

/// DELETE a resource. The status is left to the caller.
pub async fn delete(path: &str) -> AppResult<Response> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    Ok(Request::delete(&url).send().await?)
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(path, "_blank") {
        log::error!("window.open failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            api_url("https://data.bioontology.org/ontologies"),
            "https://data.bioontology.org/ontologies"
        );
    }
}
