// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{
    CreateExpenseResponse, CurrentUser, CurrentUserResponse, ExpenseSubmission, Group,
    GroupsResponse,
};
use crate::utils;

pub const DEFAULT_BASE_URL: &str = "https://secure.splitwise.com/api/v3.0";

pub struct SplitwiseClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    debug: bool,
}

impl SplitwiseClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            http: utils::http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            debug: false,
        })
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn get_current_user(&self) -> Result<CurrentUser> {
        let resp: CurrentUserResponse = self.call(Method::GET, "get_current_user", None)?;
        Ok(resp.user)
    }

    pub fn get_groups(&self) -> Result<Vec<Group>> {
        let resp: GroupsResponse = self.call(Method::GET, "get_groups", None)?;
        Ok(resp.groups)
    }

    pub fn create_expense(&self, submission: &ExpenseSubmission) -> Result<CreateExpenseResponse> {
        let body = serde_json::to_value(submission)?;
        self.call(Method::POST, "create_expense", Some(body))
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        if self.debug {
            eprintln!("[splitshot] {} {}", method, url);
            if let Some(b) = &body {
                eprintln!("[splitshot] request: {}", serde_json::to_string_pretty(b)?);
            }
        }

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");
        if let Some(b) = &body {
            request = request.json(b);
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        if self.debug {
            eprintln!("[splitshot] status: {}", status);
            eprintln!("[splitshot] response: {}", text);
        }

        if !status.is_success() {
            return Err(translate_failure(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn translate_failure(status: reqwest::StatusCode, body: &str) -> Error {
    let messages = error_messages(body);

    match status {
        reqwest::StatusCode::UNAUTHORIZED => Error::Unauthorized {
            message: messages
                .into_iter()
                .next()
                .unwrap_or_else(|| "Invalid API key".to_string()),
        },
        reqwest::StatusCode::FORBIDDEN => Error::Forbidden {
            message: messages
                .into_iter()
                .next()
                .unwrap_or_else(|| "Insufficient permissions".to_string()),
        },
        _ if !messages.is_empty() => Error::Api { messages },
        _ => Error::UnexpectedStatus { status },
    }
}

fn error_messages(body: &str) -> Vec<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        errors: crate::models::ApiErrors,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.errors.messages())
        .unwrap_or_default()
}
