// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use splitshot::matching::{find_group, find_member, find_members, normalize};
use splitshot::models::{Group, Member};

fn group(id: i64, name: &str) -> Group {
    Group {
        id,
        name: name.to_string(),
        members: Vec::new(),
    }
}

fn member(id: i64, first_name: &str) -> Member {
    Member {
        id,
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

#[test]
fn normalize_strips_whitespace_and_case_only() {
    assert_eq!(normalize("Trip  To Goa"), "triptogoa");
    assert_eq!(normalize(" trip\tto\ngoa "), "triptogoa");
    assert_eq!(normalize("Trip-To-Goa"), "trip-to-goa");
}

#[test]
fn exact_normalized_match_beats_fuzzy() {
    // "goa trip" would fuzzy-match "Goa" by prefix, but the exact pass
    // must pick "Goa Trip" first.
    let groups = vec![group(1, "Goa"), group(2, "Goa Trip")];
    assert_eq!(find_group(&groups, "goa trip").unwrap().id, 2);
}

#[test]
fn fuzzy_matches_prefix_and_containment() {
    let groups = vec![group(1, "Friends"), group(2, "Goa Trip 2025")];

    // input starts with the candidate
    assert_eq!(find_group(&groups, "goa trip 2025 beach").unwrap().id, 2);
    // candidate contains the input
    assert_eq!(find_group(&groups, "oa trip").unwrap().id, 2);
    // input contains the candidate
    assert_eq!(find_group(&groups, "my friends forever").unwrap().id, 1);
}

#[test]
fn first_candidate_wins_fuzzy_ties() {
    let groups = vec![group(1, "Trip A"), group(2, "Trip B")];
    assert_eq!(find_group(&groups, "trip").unwrap().id, 1);
}

#[test]
fn punctuation_is_not_stripped() {
    let groups = vec![group(1, "Trip-To-Goa")];
    assert!(find_group(&groups, "triptogoa").is_err());
    assert_eq!(find_group(&groups, "trip-to-goa").unwrap().id, 1);
    assert_eq!(find_group(&groups, "Trip - To - Goa").unwrap().id, 1);
}

#[test]
fn not_found_lists_available_groups() {
    let groups = vec![group(1, "Friends"), group(2, "Goa Trip")];
    let err = find_group(&groups, "Unknown Group").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("\"Unknown Group\""));
    assert!(msg.contains("Available groups: Friends, Goa Trip"));
}

#[test]
fn member_match_is_exact_after_trim_and_case() {
    let members = vec![member(1, "John"), member(2, "Jane")];
    assert_eq!(find_member(&members, "  john  ").unwrap().id, 1);
    assert_eq!(find_member(&members, "JANE").unwrap().id, 2);
}

#[test]
fn member_prefix_does_not_match() {
    let members = vec![member(1, "John"), member(2, "Jane")];
    let err = find_member(&members, "Jo").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("\"Jo\""));
    assert!(msg.contains("Available users: John, Jane"));
}

#[test]
fn member_without_first_name_is_skipped() {
    let members = vec![
        Member {
            id: 1,
            first_name: None,
            last_name: Some("Sarkar".to_string()),
        },
        member(2, "Jane"),
    ];
    assert_eq!(find_member(&members, "jane").unwrap().id, 2);

    let err = find_member(&members, "sarkar").unwrap_err();
    assert!(err.to_string().contains("Available users: Jane"));
}

#[test]
fn members_resolve_in_input_order() {
    let members = vec![member(1, "John"), member(2, "Jane"), member(3, "Bob")];
    let names = vec!["bob".to_string(), "john".to_string()];
    let ids: Vec<i64> = find_members(&members, &names)
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![3, 1]);
}
