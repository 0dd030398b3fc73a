// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::report;
use crate::utils::{id_for_user, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let username = sub.get_one::<String>("user").unwrap();

    let user_id = id_for_user(conn, username)?;
    let totals = report::totals(conn, user_id)?;

    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let row = vec![vec![
            totals.income.to_string(),
            totals.expense.to_string(),
            totals.balance.to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["Total income", "Total expense", "Balance"], row)
        );
    }
    Ok(())
}
