// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use crate::config;
use crate::expense;
use crate::models::ExpenseRequest;
use crate::splitwise::SplitwiseClient;
use crate::utils::maybe_print_json;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let cfg = config::load()?;
    let debug = sub.get_flag("debug") || cfg.debug;

    let mut req = match sub.get_one::<String>("payload") {
        Some(path) => read_payload(path)?,
        None => ExpenseRequest::default(),
    };
    merge_flags(&mut req, sub);
    if req.currency_code.as_deref().unwrap_or_default().is_empty() {
        req.currency_code = Some(cfg.default_currency.clone());
    }

    let client = SplitwiseClient::new(&cfg.api_key()?)?.debug(debug);
    let outcome =
        expense::create(&client, &req).context("Failed to create Splitwise expense")?;

    if !maybe_print_json(sub.get_flag("json"), &outcome)? {
        println!(
            "Successfully created expense \"{}\" for {} {} in Splitwise group \"{}\"",
            req.description.as_deref().unwrap_or_default(),
            outcome.split_info.currency.as_deref().unwrap_or_default(),
            outcome.split_info.total_amount,
            outcome.group_info.group_name
        );
    }
    Ok(())
}

fn read_payload(path: &str) -> Result<ExpenseRequest> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Read payload from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Open payload {}", path))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid payload JSON in {}", path))
}

/// Flags override whatever the payload carried.
fn merge_flags(req: &mut ExpenseRequest, sub: &clap::ArgMatches) {
    if let Some(v) = sub.get_one::<String>("amount") {
        req.amount = Some(v.trim().to_string());
    }
    if let Some(v) = sub.get_one::<String>("description") {
        req.description = Some(v.trim().to_string());
    }
    if let Some(v) = sub.get_one::<String>("group") {
        req.group_name = Some(v.trim().to_string());
    }
    if let Some(v) = sub.get_one::<String>("split-method") {
        req.split_method = Some(v.trim().to_string());
    }
    if let Some(v) = sub.get_one::<String>("currency") {
        req.currency_code = Some(v.trim().to_uppercase());
    }
    if let Some(v) = sub.get_one::<String>("selected-people") {
        req.selected_people = Some(v.to_string());
    }
    if let Some(vals) = sub.get_many::<String>("user-split") {
        let splits: Vec<String> = vals.map(|s| s.to_string()).collect();
        if !splits.is_empty() {
            req.user_splits = Some(splits);
        }
    }
}
