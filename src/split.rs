// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Member, UserShare};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMethod {
    Equal,
    SelectedEqually,
    Custom,
}

impl SplitMethod {
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or("");
        if raw.is_empty() || raw == "equal" || raw.eq_ignore_ascii_case("equal split") {
            return SplitMethod::Equal;
        }
        if raw == "split_selected_equally" {
            return SplitMethod::SelectedEqually;
        }
        SplitMethod::Custom
    }
}

/// Accepts a JSON array literal, a newline or comma separated list, or a bare name.
pub fn parse_selected_people(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let entries: Vec<String> = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(names) => names,
            Err(_) => trimmed[1..trimmed.len() - 1]
                .replace(['\'', '"'], "")
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    } else if trimmed.contains('\n') {
        trimmed.lines().map(str::to_string).collect()
    } else if trimmed.contains(',') {
        trimmed.split(',').map(str::to_string).collect()
    } else {
        vec![trimmed.to_string()]
    };

    entries
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

pub fn parse_amount(raw: &str) -> Result<Decimal> {
    raw.trim().parse::<Decimal>().map_err(|_| Error::InvalidAmount {
        raw: raw.to_string(),
    })
}

pub fn selected_equal_shares(
    amount_raw: &str,
    current_user_id: i64,
    members: &[&Member],
) -> Result<Vec<UserShare>> {
    let total = parse_amount(amount_raw)?;
    let count = Decimal::from(members.len() as i64);
    // Each share rounds independently; the total is not reconciled.
    let share = (total / count).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let owed = format!("{:.2}", share);

    Ok(members
        .iter()
        .map(|member| UserShare {
            user_id: member.id,
            paid_share: if member.id == current_user_id {
                amount_raw.trim().to_string()
            } else {
                "0.00".to_string()
            },
            owed_share: Some(owed.clone()),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
pub struct UserSplitSpec {
    #[serde(deserialize_with = "de_user_id")]
    pub user_id: i64,
    #[serde(default)]
    pub paid_share: Option<String>,
    #[serde(default)]
    pub owed_share: Option<String>,
}

fn de_user_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Other(Value),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(id) => Ok(id),
        Raw::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid user_id '{}'", text))),
        Raw::Other(value) => Err(serde::de::Error::custom(format!(
            "invalid user_id {}",
            value
        ))),
    }
}

pub fn custom_shares(
    specs: &[String],
    amount_raw: &str,
    current_user_id: i64,
) -> Result<Vec<UserShare>> {
    specs
        .iter()
        .map(|raw| {
            let spec: UserSplitSpec =
                serde_json::from_str(raw).map_err(|source| Error::InvalidSplitSpec {
                    raw: raw.clone(),
                    source,
                })?;
            // The payer's paid share always carries the full amount.
            let paid_share = if spec.user_id == current_user_id {
                amount_raw.trim().to_string()
            } else {
                spec.paid_share
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "0.00".to_string())
            };
            Ok(UserShare {
                user_id: spec.user_id,
                paid_share,
                owed_share: spec.owed_share,
            })
        })
        .collect()
}
