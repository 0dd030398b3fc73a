// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use rusqlite::Connection;

use crate::export::{self, MISSING_DESCRIPTION};
use crate::models::SortOrder;
use crate::utils::id_for_user;
use crate::{report, store};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(conn, sub),
        _ => Ok(()),
    }
}

fn export_records(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let username = sub.get_one::<String>("user").unwrap();

    let user_id = id_for_user(conn, username)?;
    let records = store::list_for_user(conn, user_id, SortOrder::Ascending)?;
    let totals = report::totals(conn, user_id)?;

    let out = match sub.get_one::<String>("out") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(export::export_filename(
            &fmt,
            chrono::Local::now().naive_local(),
        )),
    };

    match fmt.as_str() {
        "xlsx" => {
            let buf = export::workbook_bytes(&records, &totals)?;
            std::fs::write(&out, buf)?;
        }
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record([
                "date",
                "type",
                "category",
                "description",
                "amount",
                "recorded_at",
            ])?;
            for r in &records {
                wtr.write_record([
                    r.record_date.to_string(),
                    r.record_type.label().to_string(),
                    r.category.clone(),
                    r.description
                        .clone()
                        .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
                    r.amount.to_string(),
                    r.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(&out, serde_json::to_string_pretty(&records)?)?;
        }
        other => anyhow::bail!("Unknown format: {} (use xlsx|csv|json)", other),
    }
    println!("Exported {} records to {}", records.len(), out.display());
    Ok(())
}
