use crate::tests::checklist;
use crate::{ChecklistAttributes, CoreError, NewChecklist};

use googletest::prelude::*;

#[test]
fn given_partial_attributes_when_applied_then_only_present_fields_change() {
    // Given
    let mut item = checklist(1, "Original", false);

    // When
    item.apply_attributes(ChecklistAttributes {
        is_done: Some(true),
        ..Default::default()
    });

    // Then
    assert_that!(item.subject.as_str(), eq("Original"));
    assert_that!(item.is_done, eq(true));
    assert_that!(item.position, eq(1));
}

#[test]
fn given_blank_subject_when_validated_then_subject_error() {
    // Given
    let mut item = checklist(1, "Original", false);
    item.subject = "   ".to_string();

    // When
    let result = item.validate();

    // Then
    match result {
        Err(CoreError::Validation { errors, .. }) => {
            assert_that!(errors.errors()[0].field.as_str(), eq("subject"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_subject_over_limit_when_validated_then_error() {
    let item = checklist(1, &"x".repeat(513), false);
    assert_that!(item.validate(), err(anything()));
}

#[test]
fn given_subject_at_limit_when_validated_then_ok() {
    let item = checklist(1, &"x".repeat(512), false);
    assert_that!(item.validate(), ok(anything()));
}

#[test]
fn given_attributes_when_building_new_item_then_issue_comes_from_caller() {
    // When
    let new_item = NewChecklist::from_attributes(
        42,
        ChecklistAttributes {
            subject: Some("Deploy".to_string()),
            ..Default::default()
        },
    );

    // Then
    assert_that!(new_item.issue_id, eq(42));
    assert_that!(new_item.is_done, eq(false));
    assert_that!(new_item.position, none());
    assert_that!(new_item.validate(), ok(anything()));
}

#[test]
fn given_missing_subject_when_building_new_item_then_invalid() {
    let new_item = NewChecklist::from_attributes(42, ChecklistAttributes::default());
    assert_that!(new_item.validate(), err(anything()));
}

#[test]
fn test_journal_label_marks_done_state() {
    assert_eq!(checklist(1, "Ship", true).journal_label(), "[x] Ship");
    assert_eq!(checklist(1, "Ship", false).journal_label(), "[ ] Ship");
}

#[test]
fn given_position_below_one_when_validated_then_position_error() {
    // Given
    let mut item = checklist(1, "Ordered", false);
    item.position = 0;

    // When
    let result = item.validate();

    // Then
    match result {
        Err(CoreError::Validation { errors, .. }) => {
            assert_that!(errors.errors().len(), eq(1));
            assert_that!(errors.errors()[0].field.as_str(), eq("position"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_new_item_with_negative_position_when_validated_then_error() {
    let new_item = NewChecklist::from_attributes(
        42,
        ChecklistAttributes {
            subject: Some("Deploy".to_string()),
            position: Some(-5),
            ..Default::default()
        },
    );

    assert_that!(new_item.validate(), err(anything()));
}

#[test]
fn given_new_item_at_max_position_when_validated_then_ok() {
    let new_item = NewChecklist::from_attributes(
        42,
        ChecklistAttributes {
            subject: Some("Deploy".to_string()),
            position: Some(i32::MAX),
            ..Default::default()
        },
    );

    assert_that!(new_item.validate(), ok(anything()));
}
