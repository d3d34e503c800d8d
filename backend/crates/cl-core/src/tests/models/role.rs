use crate::{Permission, ProjectMember, Role};

use std::str::FromStr;

#[test]
fn test_role_round_trips_through_str() {
    for role in [Role::Manager, Role::Developer, Role::Reporter, Role::Viewer] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
    assert!(Role::from_str("owner").is_err());
}

#[test]
fn test_viewer_can_only_view() {
    assert!(Role::Viewer.allows(Permission::ViewChecklists));
    assert!(!Role::Viewer.allows(Permission::EditChecklists));
    assert!(!Role::Viewer.allows(Permission::DoneChecklists));
}

#[test]
fn test_reporter_can_mark_done_but_not_edit() {
    assert!(Role::Reporter.allows(Permission::DoneChecklists));
    assert!(!Role::Reporter.allows(Permission::EditChecklists));
}

#[test]
fn test_developer_holds_every_checklist_permission() {
    let member = ProjectMember::new(1, 7, Role::Developer);
    assert!(member.has_permission(Permission::ViewChecklists));
    assert!(member.has_permission(Permission::EditChecklists));
    assert!(member.has_permission(Permission::DoneChecklists));
}
