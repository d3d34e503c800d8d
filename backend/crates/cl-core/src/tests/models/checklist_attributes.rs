use crate::ChecklistAttributes;

use serde_json::json;

#[test]
fn test_unknown_keys_are_dropped() {
    let attributes: ChecklistAttributes = serde_json::from_value(json!({
        "subject": "Write docs",
        "issue_id": 999,
        "id": 5,
        "created_at": "2020-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(
        attributes,
        ChecklistAttributes {
            subject: Some("Write docs".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn test_empty_payload_is_all_none() {
    let attributes: ChecklistAttributes = serde_json::from_value(json!({})).unwrap();
    assert_eq!(attributes, ChecklistAttributes::default());
}
