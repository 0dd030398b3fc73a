// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use crate::models::{FinanceRecord, NewRecord, RecordType, SortOrder};

/// Persist a validated record in a single transaction. The id and creation
/// timestamp are assigned by the database; on any failure the transaction
/// rolls back and no partial record exists.
pub fn insert_record(conn: &mut Connection, user_id: i64, record: &NewRecord) -> Result<i64> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO finance_records(user_id, record_date, record_type, category, description, amount)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user_id,
            record.record_date,
            record.record_type.as_str(),
            record.category,
            record.description,
            record.amount.to_string()
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;
    Ok(id)
}

/// All records owned by `user_id`, ordered by (record_date, id). Records on
/// the same date keep insertion order; descending is the exact reverse of
/// ascending.
pub fn list_for_user(
    conn: &Connection,
    user_id: i64,
    order: SortOrder,
) -> Result<Vec<FinanceRecord>> {
    let sql = match order {
        SortOrder::Ascending => {
            "SELECT id, user_id, record_date, record_type, category, description, amount, created_at
             FROM finance_records WHERE user_id=?1 ORDER BY record_date ASC, id ASC"
        }
        SortOrder::Descending => {
            "SELECT id, user_id, record_date, record_type, category, description, amount, created_at
             FROM finance_records WHERE user_id=?1 ORDER BY record_date DESC, id DESC"
        }
    };
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, i64>(1)?,
            r.get::<_, NaiveDate>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, NaiveDateTime>(7)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, user_id, record_date, kind, category, description, amount, created_at) = row?;
        let record_type = kind
            .parse::<RecordType>()
            .with_context(|| format!("Invalid record type '{}' for record {}", kind, id))?;
        let amount = amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored amount '{}' for record {}", amount, id))?;
        records.push(FinanceRecord {
            id,
            user_id,
            record_date,
            record_type,
            category,
            description,
            amount,
            created_at,
        });
    }
    Ok(records)
}
