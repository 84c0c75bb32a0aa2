// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use splitshot::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("create", sub)) => commands::create::handle(sub)?,
        Some(("groups", sub)) => commands::groups::handle(sub)?,
        Some(("whoami", sub)) => commands::whoami::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
