use crate::ResponseFormat;

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::prelude::*;

#[test]
fn test_accept_javascript_negotiates_js() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/javascript, application/javascript, */*; q=0.01"),
    );

    assert_that!(ResponseFormat::negotiate(&headers), eq(ResponseFormat::Js));
}

#[test]
fn test_xhr_header_negotiates_js() {
    let mut headers = HeaderMap::new();
    headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

    assert_that!(ResponseFormat::negotiate(&headers), eq(ResponseFormat::Js));
}

#[test]
fn test_browser_accept_negotiates_html() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
    );

    assert_that!(ResponseFormat::negotiate(&headers), eq(ResponseFormat::Html));
}

#[test]
fn test_no_headers_negotiates_html() {
    assert_that!(ResponseFormat::negotiate(&HeaderMap::new()), eq(ResponseFormat::Html));
}
