// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use crate::models::{RecordType, Totals};

/// Income, expense, and balance totals over exactly the records owned by
/// `user_id`. Recomputed fully on every call; summation stays in `Decimal`
/// so currency math is exact, with the results pinned to two fractional
/// digits post-sum.
pub fn totals(conn: &Connection, user_id: i64) -> Result<Totals> {
    let mut stmt =
        conn.prepare("SELECT record_type, amount FROM finance_records WHERE user_id=?1")?;
    let rows = stmt.query_map(params![user_id], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
    })?;

    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for row in rows {
        let (kind, raw) = row?;
        let amount = raw
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored amount '{}'", raw))?;
        match kind.parse::<RecordType>()? {
            RecordType::Income => income += amount,
            RecordType::Expense => expense += amount,
        }
    }

    let mut balance = income - expense;
    income.rescale(2);
    expense.rescale(2);
    balance.rescale(2);
    Ok(Totals {
        income,
        expense,
        balance,
    })
}
