// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the result as pretty JSON")
}

fn debug_flag() -> Arg {
    Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Log requests and responses to stderr")
}

pub fn build_cli() -> Command {
    Command::new("splitshot")
        .version(crate_version!())
        .about("Create Splitwise expenses from iOS Shortcut payloads")
        .subcommand(
            Command::new("create")
                .about("Create an expense in a Splitwise group")
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .value_name("FILE")
                        .help("JSON request body as sent by the trigger; '-' reads stdin"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .value_name("AMOUNT")
                        .help("Total cost, e.g. 500 or 499.50"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .value_name("TEXT")
                        .help("What the expense was for"),
                )
                .arg(
                    Arg::new("group")
                        .long("group")
                        .value_name("NAME")
                        .help("Group name; fuzzy-matched against your groups"),
                )
                .arg(
                    Arg::new("split-method")
                        .long("split-method")
                        .value_name("METHOD")
                        .help("equal (default), split_selected_equally, or custom"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .value_name("CODE")
                        .help("ISO currency code; defaults to the configured currency"),
                )
                .arg(
                    Arg::new("selected-people")
                        .long("selected-people")
                        .value_name("NAMES")
                        .help("First names for split_selected_equally; comma or newline separated"),
                )
                .arg(
                    Arg::new("user-split")
                        .long("user-split")
                        .value_name("JSON")
                        .action(ArgAction::Append)
                        .help("Custom split entry, repeatable, e.g. '{\"user_id\":2,\"owed_share\":\"250\"}'"),
                )
                .arg(json_flag())
                .arg(debug_flag()),
        )
        .subcommand(
            Command::new("groups")
                .about("List Splitwise groups visible to the configured account")
                .arg(json_flag())
                .arg(debug_flag()),
        )
        .subcommand(
            Command::new("whoami")
                .about("Show the authenticated Splitwise account")
                .arg(json_flag())
                .arg(debug_flag()),
        )
}
