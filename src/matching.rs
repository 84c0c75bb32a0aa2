// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::{Group, Member};

pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

pub fn find_group<'a>(groups: &'a [Group], input: &str) -> Result<&'a Group> {
    let wanted = normalize(input);

    if let Some(group) = groups.iter().find(|g| normalize(&g.name) == wanted) {
        return Ok(group);
    }

    let partial = groups.iter().find(|g| {
        let candidate = normalize(&g.name);
        wanted.starts_with(&candidate) || candidate.contains(&wanted) || wanted.contains(&candidate)
    });

    partial.ok_or_else(|| Error::GroupNotFound {
        input: input.to_string(),
        available: groups.iter().map(|g| g.name.clone()).collect(),
    })
}

pub fn find_member<'a>(members: &'a [Member], first_name: &str) -> Result<&'a Member> {
    let wanted = first_name.trim().to_lowercase();

    members
        .iter()
        .find(|m| {
            m.first_name
                .as_deref()
                .is_some_and(|name| name.trim().to_lowercase() == wanted)
        })
        .ok_or_else(|| Error::MemberNotFound {
            input: first_name.trim().to_string(),
            available: members
                .iter()
                .filter_map(|m| m.first_name.clone())
                .collect(),
        })
}

pub fn find_members<'a>(members: &'a [Member], first_names: &[String]) -> Result<Vec<&'a Member>> {
    first_names
        .iter()
        .map(|name| find_member(members, name))
        .collect()
}
