// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("cashbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track income and expenses per user and export them to a spreadsheet")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add")
                        .about("Add a user")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("list").about("List users"))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a user and all of their records")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("record")
                .about("Record and list income/expense entries")
                .subcommand(
                    Command::new("add")
                        .about("Record a new entry")
                        .arg(
                            Arg::new("user")
                                .long("user")
                                .required(true)
                                .help("Owning user"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Record date (YYYY-MM-DD)"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("'income' or 'expense'"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                // Let negative values through to validation.
                                .allow_hyphen_values(true)
                                .help("Positive amount, rounded to 2 decimal places"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List records for a user")
                        .arg(Arg::new("user").long("user").required(true))
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report").about("Aggregate reports").subcommand(
                json_flags(
                    Command::new("summary")
                        .about("Show income, expense, and balance totals for a user")
                        .arg(Arg::new("user").long("user").required(true)),
                ),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("records")
                    .about("Export a user's records together with totals")
                    .arg(Arg::new("user").long("user").required(true))
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("xlsx")
                            .help("xlsx|csv|json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .help("Output file (defaults to financial_data_<timestamp>.<ext>)"),
                    ),
            ),
        )
}
