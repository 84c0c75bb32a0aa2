// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::config;
use crate::splitwise::SplitwiseClient;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let cfg = config::load()?;
    let debug = sub.get_flag("debug") || cfg.debug;

    let client = SplitwiseClient::new(&cfg.api_key()?)?.debug(debug);
    let groups = client
        .get_groups()
        .context("Failed to fetch Splitwise groups")?;

    if !maybe_print_json(sub.get_flag("json"), &groups)? {
        let rows: Vec<Vec<String>> = groups
            .iter()
            .map(|g| {
                vec![
                    g.id.to_string(),
                    g.name.clone(),
                    g.members
                        .iter()
                        .filter_map(|m| m.first_name.clone())
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Members"], rows));
    }
    Ok(())
}
