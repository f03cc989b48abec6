// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, value_parser, Arg, ArgAction, Command};

fn month_arg() -> Arg {
    arg!(--month <MONTH> "Month name (e.g. January, jan) or All").required(false)
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print JSON"))
        .arg(arg!(--jsonl "Print one JSON object per line"))
}

pub fn build_cli() -> Command {
    Command::new("finora")
        .about("Finora - spreadsheet-backed finance tracker with a chat assistant")
        .version(clap::crate_version!())
        .arg(
            arg!(--"source-url" <URL> "Base URL of the transaction sheet web app")
                .required(false)
                .global(true),
        )
        .subcommand(json_args(
            Command::new("summary")
                .about("Income, expense and savings with monthly and category breakdowns")
                .arg(month_arg()),
        ))
        .subcommand(Command::new("months").about("List the month filter options"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(json_args(
                    Command::new("list")
                        .about("List recorded transactions, newest first")
                        .arg(month_arg())
                        .arg(
                            arg!(--limit <N> "Show at most N rows")
                                .required(false)
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Register a new transaction")
                        .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--amount <AMOUNT> "Non-negative amount").required(true))
                        .arg(
                            arg!(--method <METHOD> "Cash|Card|UPI|Other")
                                .required(false)
                                .default_value("Cash"),
                        )
                        .arg(arg!(--category <CATEGORY>).required(true))
                        .arg(arg!(--remark <REMARK>).required(false))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("Income|Expenses")
                                .default_value("Expenses"),
                        ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write normalized transactions to a file")
                .arg(arg!(--out <PATH>).required(true))
                .arg(
                    arg!(--format <FORMAT> "csv|json")
                        .required(false)
                        .default_value("csv"),
                )
                .arg(month_arg()),
        )
        .subcommand(Command::new("doctor").about("Report rows the dashboard cannot fully use"))
        .subcommand(
            Command::new("ask")
                .about("Ask one question about your finances")
                .arg(
                    Arg::new("question")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("chat").about("Interactive chat over your transactions"))
        .subcommand(Command::new("config").about("Show the resolved configuration"))
}
