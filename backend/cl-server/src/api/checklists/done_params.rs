use serde::Deserialize;

/// `is_done` as sent by the checkbox, from the query string or a form body
#[derive(Debug, Default, Deserialize)]
pub struct DoneParams {
    pub is_done: Option<String>,
}

/// Only the exact string "true" ticks an item off.
pub fn parse_is_done(value: Option<&str>) -> bool {
    value == Some("true")
}
