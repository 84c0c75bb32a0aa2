// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Authentication failed (401): {message}")]
    Unauthorized { message: String },

    #[error("Access forbidden (403): {message}")]
    Forbidden { message: String },

    #[error("Splitwise API error: {}", .messages.join(", "))]
    Api { messages: Vec<String> },

    #[error("Splitwise API errors: {}", .messages.join(", "))]
    ExpenseRejected { messages: Vec<String> },

    #[error("Request failed with status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },

    #[error("Group matching \"{input}\" not found. Available groups: {}", .available.join(", "))]
    GroupNotFound {
        input: String,
        available: Vec<String>,
    },

    #[error("No users found in the specified group")]
    EmptyGroup,

    #[error("User with first name \"{input}\" not found in group. Available users: {}", .available.join(", "))]
    MemberNotFound {
        input: String,
        available: Vec<String>,
    },

    #[error(
        "Split selected equally specified but no selected_people provided. \
         Make sure your iOS Shortcut sends the selected people data in the request body."
    )]
    NoSelectedPeople,

    #[error("Custom splits specified but no user_splits provided")]
    NoUserSplits,

    #[error("Invalid JSON format in user_splits: {raw}")]
    InvalidSplitSpec {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid amount '{raw}'")]
    InvalidAmount { raw: String },

    #[error("Expense creation failed - no expense returned")]
    NoExpenseReturned,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
