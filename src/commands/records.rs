// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::export::MISSING_DESCRIPTION;
use crate::models::SortOrder;
use crate::store;
use crate::utils::{id_for_user, maybe_print_json, pretty_table};
use crate::validate::{SubmissionForm, validate_submission};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("user").unwrap();
    let form = SubmissionForm {
        date: sub.get_one::<String>("date").unwrap(),
        record_type: sub.get_one::<String>("type").unwrap(),
        category: sub.get_one::<String>("category").unwrap(),
        description: sub.get_one::<String>("description").map(String::as_str),
        amount: sub.get_one::<String>("amount").unwrap(),
    };

    // Validation is all-or-nothing and happens before any storage access.
    let record = validate_submission(&form)?;
    let user_id = id_for_user(conn, username)?;

    let id = match store::insert_record(conn, user_id, &record) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Failed to save finance record");
            anyhow::bail!("Failed to save the record, please try again");
        }
    };
    println!(
        "Recorded {} of {} in '{}' on {} (id: {})",
        record.record_type.as_str(),
        record.amount,
        record.category,
        record.record_date,
        id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let username = sub.get_one::<String>("user").unwrap();
    let order = match sub.get_one::<String>("order").unwrap().as_str() {
        "asc" => SortOrder::Ascending,
        _ => SortOrder::Descending,
    };

    let user_id = id_for_user(conn, username)?;
    let mut records = store::list_for_user(conn, user_id, order)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        records.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.record_date.to_string(),
                    r.record_type.label().to_string(),
                    r.category.clone(),
                    r.description
                        .clone()
                        .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
                    r.amount.to_string(),
                    r.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "Recorded"],
                rows,
            )
        );
    }
    Ok(())
}
