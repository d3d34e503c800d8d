use cl_core::Checklist;

/// Escape a value for a single-quoted JavaScript string literal
fn js_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Fragment that refreshes one checklist row, and the issue's progress bar
/// when its ratio was recalculated.
pub fn render(item: &Checklist, done_ratio: Option<i32>) -> String {
    let mut script = format!(
        "(function() {{\n  var row = document.getElementById('checklist_item_{id}');\n  if (row) {{\n    row.classList.toggle('is-done', {done});\n    var box = row.querySelector('input[type=checkbox]');\n    if (box) {{ box.checked = {done}; }}\n    var label = row.querySelector('.checklist-subject');\n    if (label) {{ label.textContent = '{subject}'; }}\n  }}\n",
        id = item.id,
        done = item.is_done,
        subject = js_escape(&item.subject),
    );

    if let Some(ratio) = done_ratio {
        script.push_str(&format!(
            "  var progress = document.querySelector('#issue_{issue_id} .progress');\n  if (progress) {{ progress.setAttribute('data-done-ratio', '{ratio}'); }}\n",
            issue_id = item.issue_id,
        ));
    }

    script.push_str("})();\n");
    script
}
