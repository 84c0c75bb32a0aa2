// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::config;
use crate::splitwise::SplitwiseClient;
use crate::utils::maybe_print_json;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let cfg = config::load()?;
    let debug = sub.get_flag("debug") || cfg.debug;

    let client = SplitwiseClient::new(&cfg.api_key()?)?.debug(debug);
    let user = client
        .get_current_user()
        .context("Failed to fetch the current Splitwise user")?;

    if !maybe_print_json(sub.get_flag("json"), &user)? {
        let name = user.full_name();
        if name.is_empty() {
            println!("User id {}", user.id);
        } else {
            println!("{} (id {})", name, user.id);
        }
        if let Some(email) = &user.email {
            println!("Email: {}", email);
        }
    }
    Ok(())
}
