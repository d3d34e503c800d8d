use axum::http::{HeaderMap, header};

/// Representation a browser-facing action should answer with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Script fragment for an asynchronous page update
    Js,
    /// Plain browser navigation
    Html,
}

impl ResponseFormat {
    pub fn negotiate(headers: &HeaderMap) -> Self {
        let wants_script = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|accept| accept.to_ascii_lowercase().contains("javascript"));

        let is_xhr = headers
            .get("X-Requested-With")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"));

        if wants_script || is_xhr {
            ResponseFormat::Js
        } else {
            ResponseFormat::Html
        }
    }
}
