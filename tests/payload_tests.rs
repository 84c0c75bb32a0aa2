// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use splitshot::models::ExpenseRequest;

#[test]
fn shortcut_field_spellings_are_accepted() {
    let req: ExpenseRequest = serde_json::from_str(
        r#"{
            "Amount": "500",
            "Description": "Dinner",
            "Group": "Friends",
            "Split Method": "split_selected_equally",
            "Currency": "INR",
            "selected_people": "John,Jane",
            "device_name": "iPhone"
        }"#,
    )
    .unwrap();

    assert_eq!(req.amount.as_deref(), Some("500"));
    assert_eq!(req.description.as_deref(), Some("Dinner"));
    assert_eq!(req.group_name.as_deref(), Some("Friends"));
    assert_eq!(req.split_method.as_deref(), Some("split_selected_equally"));
    assert_eq!(req.currency_code.as_deref(), Some("INR"));
    assert_eq!(req.selected_people.as_deref(), Some("John,Jane"));
    assert!(req.missing_fields().is_empty());
}

#[test]
fn lowercase_alias_spellings_are_accepted() {
    let req: ExpenseRequest = serde_json::from_str(
        r#"{"amount": "90", "description": "Cab", "group": "Goa Trip", "split method": "equal"}"#,
    )
    .unwrap();

    assert_eq!(req.group_name.as_deref(), Some("Goa Trip"));
    assert_eq!(req.split_method.as_deref(), Some("equal"));
    assert!(req.missing_fields().is_empty());
}

#[test]
fn snake_case_spellings_are_accepted() {
    let req: ExpenseRequest = serde_json::from_str(
        r#"{
            "amount": "120",
            "description": "Groceries",
            "group_name": "Friends",
            "split_method": "custom",
            "currency_code": "USD",
            "user_splits": ["{\"user_id\": 1, \"owed_share\": \"60\"}"]
        }"#,
    )
    .unwrap();

    assert_eq!(req.group_name.as_deref(), Some("Friends"));
    assert_eq!(req.split_method.as_deref(), Some("custom"));
    assert_eq!(req.currency_code.as_deref(), Some("USD"));
    assert_eq!(
        req.user_splits.unwrap(),
        vec![r#"{"user_id": 1, "owed_share": "60"}"#]
    );
}
