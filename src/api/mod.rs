//! Marketplace API Client
//!
//! HTTP bindings to the remote marketplace service, organized by resource.
//! Every call returns `ApiResult`; callers catch and log at the call site.

mod categories;
mod items;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestMode};

use crate::config::Config;

// Re-export all public items
pub use categories::*;
pub use items::*;

// ========================
// Paths
// ========================

pub const ITEMS_PATH: &str = "/items";
pub const CATEGORIES_PATH: &str = "/categories";

// ========================
// Errors
// ========================

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of a marketplace request.
///
/// Server-side rejections are not errors here: a completed POST is reported
/// through `SubmitStatus` whatever its status code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (network, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),

    /// GET answered with a non-2xx status
    #[error("server responded {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Multipart payload could not be assembled
    #[error("could not build form data: {0}")]
    Form(String),
}

impl ApiError {
    fn form(err: JsValue) -> Self {
        ApiError::Form(format!("{:?}", err))
    }
}

/// Outcome of a completed submission, kept for logging only
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitStatus {
    pub code: u16,
    pub text: String,
}

impl SubmitStatus {
    fn from_response(resp: &Response) -> Self {
        Self {
            code: resp.status(),
            text: resp.status_text(),
        }
    }
}

// ========================
// Transport
// ========================

/// Reads only trust 2xx bodies
fn ensure_success(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

async fn get_json<T: DeserializeOwned>(config: &Config, path: &str) -> ApiResult<T> {
    let url = config.endpoint(path);
    let resp = Request::get(&url)
        .mode(RequestMode::Cors)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_success(resp.status())?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_form(config: &Config, path: &str, form: FormData) -> ApiResult<SubmitStatus> {
    let url = config.endpoint(path);
    let resp = Request::post(&url)
        .mode(RequestMode::Cors)
        .body(form)
        .map_err(|e| ApiError::Form(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(SubmitStatus::from_response(&resp))
}

fn text_form(fields: &[(&str, &str)]) -> ApiResult<FormData> {
    let form = FormData::new().map_err(ApiError::form)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(ApiError::form)?;
    }
    Ok(form)
}
