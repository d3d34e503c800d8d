use crate::api::checklists::done_script::render;

use cl_core::Checklist;

use chrono::Utc;

fn item(subject: &str, is_done: bool) -> Checklist {
    Checklist {
        id: 7,
        issue_id: 42,
        subject: subject.to_string(),
        is_done,
        is_section: false,
        position: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_script_targets_item_row() {
    let script = render(&item("Write tests", true), None);

    assert!(script.contains("checklist_item_7"));
    assert!(script.contains("box.checked = true"));
    assert!(!script.contains("issue_42"));
}

#[test]
fn test_script_updates_progress_when_ratio_recalculated() {
    let script = render(&item("Write tests", false), Some(50));

    assert!(script.contains("#issue_42 .progress"));
    assert!(script.contains("'50'"));
}

#[test]
fn test_script_escapes_subject() {
    let script = render(&item("it's </script><b>", false), None);

    assert!(script.contains("it\\'s"));
    assert!(!script.contains("</script>"));
}
