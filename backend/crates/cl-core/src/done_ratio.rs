use crate::Checklist;

/// Issue completion derived from its checklist.
///
/// Sections are ignored. The result is rounded down to a multiple of ten.
/// Returns None when there is nothing to count, in which case the issue's
/// ratio should be left alone.
pub fn checklist_done_ratio(items: &[Checklist]) -> Option<i32> {
    let (done, total) = items
        .iter()
        .filter(|item| !item.is_section)
        .fold((0i64, 0i64), |(done, total), item| {
            (done + i64::from(item.is_done), total + 1)
        });

    if total == 0 {
        return None;
    }

    Some(((done * 10 / total) * 10) as i32)
}
