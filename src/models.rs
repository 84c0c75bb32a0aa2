// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub user: CurrentUser,
}

#[derive(Debug, Deserialize)]
pub struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
pub struct CreateExpenseResponse {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub errors: ApiErrors,
}

/// The errors field arrives as a list of strings, a list of objects with
/// a message, or a map of field name to messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrors {
    List(Vec<ErrorEntry>),
    Fields(BTreeMap<String, Vec<String>>),
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Object { message: String },
    Text(String),
    Other(Value),
}

impl Default for ApiErrors {
    fn default() -> Self {
        ApiErrors::List(Vec::new())
    }
}

impl ApiErrors {
    pub fn is_empty(&self) -> bool {
        match self {
            ApiErrors::List(entries) => entries.is_empty(),
            ApiErrors::Fields(map) => map.values().all(|msgs| msgs.is_empty()),
            ApiErrors::Other(value) => value.is_null(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiErrors::List(entries) => entries
                .iter()
                .map(|entry| match entry {
                    ErrorEntry::Object { message } => message.clone(),
                    ErrorEntry::Text(text) => text.clone(),
                    ErrorEntry::Other(value) => value.to_string(),
                })
                .collect(),
            ApiErrors::Fields(map) => map
                .iter()
                .flat_map(|(field, msgs)| {
                    msgs.iter().map(move |msg| format!("{}: {}", field, msg))
                })
                .collect(),
            ApiErrors::Other(value) if value.is_null() => Vec::new(),
            ApiErrors::Other(value) => vec![value.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserShare {
    pub user_id: i64,
    pub paid_share: String,
    pub owed_share: Option<String>,
}

/// Per-participant shares go out as flattened `users__{i}__{field}` keys.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSubmission {
    pub cost: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub group_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_equally: Option<bool>,
    #[serde(flatten)]
    pub user_shares: BTreeMap<String, Value>,
}

impl ExpenseSubmission {
    pub fn equal_split(
        cost: &str,
        description: &str,
        currency_code: Option<String>,
        group_id: i64,
    ) -> Self {
        Self {
            cost: cost.to_string(),
            description: description.to_string(),
            currency_code,
            group_id,
            split_equally: Some(true),
            user_shares: BTreeMap::new(),
        }
    }

    pub fn with_user_shares(
        cost: &str,
        description: &str,
        currency_code: Option<String>,
        group_id: i64,
        shares: &[UserShare],
    ) -> Self {
        let mut user_shares = BTreeMap::new();
        for (i, share) in shares.iter().enumerate() {
            user_shares.insert(format!("users__{}__user_id", i), json!(share.user_id));
            user_shares.insert(format!("users__{}__paid_share", i), json!(share.paid_share));
            if let Some(owed) = &share.owed_share {
                user_shares.insert(format!("users__{}__owed_share", i), json!(owed));
            }
        }
        Self {
            cost: cost.to_string(),
            description: description.to_string(),
            currency_code,
            group_id,
            split_equally: None,
            user_shares,
        }
    }
}

/// The aliases cover the field spellings an iOS Shortcut posts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseRequest {
    #[serde(alias = "Amount")]
    pub amount: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Group", alias = "group")]
    pub group_name: Option<String>,
    #[serde(alias = "Split Method", alias = "split method")]
    pub split_method: Option<String>,
    #[serde(alias = "Currency")]
    pub currency_code: Option<String>,
    pub selected_people: Option<String>,
    pub user_splits: Option<Vec<String>>,
}

impl ExpenseRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.as_deref().unwrap_or("").is_empty() {
            missing.push("amount");
        }
        if self.description.as_deref().unwrap_or("").is_empty() {
            missing.push("description");
        }
        if self.group_name.as_deref().unwrap_or("").is_empty() {
            missing.push("group_name");
        }
        missing
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    pub group_id: i64,
    pub group_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub current_user_id: i64,
    pub current_user_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitInfo {
    pub split_method: String,
    pub total_amount: String,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseOutcome {
    pub success: bool,
    pub expense_id: i64,
    pub expense: Expense,
    pub group_info: GroupInfo,
    pub user_info: UserInfo,
    pub split_info: SplitInfo,
}
