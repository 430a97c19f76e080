//! Client Configuration
//!
//! Build-time environment, resolved once when the app mounts.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";
const PLACEHOLDER_IMAGE: &str = "/logo192.png";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Marketplace API base, no trailing slash
    pub api_url: String,
    /// Shown for items without an image
    pub placeholder_image: String,
}

impl Config {
    pub fn new(api_url: &str, public_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            placeholder_image: format!("{}{}", public_url.trim_end_matches('/'), PLACEHOLDER_IMAGE),
        }
    }

    /// Read `MERCARI_API_URL` / `MERCARI_PUBLIC_URL` baked in at build time
    pub fn from_env() -> Self {
        let api_url = option_env!("MERCARI_API_URL").unwrap_or(DEFAULT_API_URL);
        let public_url = option_env!("MERCARI_PUBLIC_URL").unwrap_or("");
        log::debug!("[CONFIG] api_url={} public_url={:?}", api_url, public_url);
        Self::new(api_url, public_url)
    }

    /// Join an API path (leading slash included) onto the base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// `<server>/image/<image_name>`, or the placeholder when there is no image
    pub fn image_url(&self, image_name: &str) -> String {
        if image_name.is_empty() {
            return self.placeholder_image.clone();
        }
        let segment = utf8_percent_encode(image_name, PATH_SEGMENT);
        self.endpoint(&format!("/image/{}", segment))
    }
}
