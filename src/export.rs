// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use crate::models::{FinanceRecord, Totals};

pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Placeholder rendered for records without a description.
pub const MISSING_DESCRIPTION: &str = "-";

const SHEET_NAME: &str = "Financial records";
const HEADERS: [&str; 6] = [
    "Date",
    "Type",
    "Category",
    "Description",
    "Amount",
    "Recorded at",
];
const SUMMARY_LABELS: [&str; 3] = ["Total income", "Total expense", "Balance"];
const MIN_COLUMN_WIDTH: f64 = 12.0;

/// Render records plus totals into a complete xlsx document, entirely in
/// memory. Rows follow the order of `records`; callers pass the ascending
/// listing. Amount cells are numbers so spreadsheet tools can still sum
/// them. The blank row and the three summary rows are appended only when at
/// least one record exists.
pub fn workbook_bytes(records: &[FinanceRecord], totals: &Totals) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    let mut row: u32 = 1;
    for record in records {
        let cells = [
            record.record_date.to_string(),
            record.record_type.label().to_string(),
            record.category.clone(),
            record
                .description
                .clone()
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            record.amount.to_string(),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ];
        for (col, text) in cells.iter().enumerate() {
            widths[col] = widths[col].max(text.chars().count());
        }
        sheet.write_string(row, 0, cells[0].as_str())?;
        sheet.write_string(row, 1, cells[1].as_str())?;
        sheet.write_string(row, 2, cells[2].as_str())?;
        sheet.write_string(row, 3, cells[3].as_str())?;
        sheet.write_number(row, 4, to_number(record.amount)?)?;
        sheet.write_string(row, 5, cells[5].as_str())?;
        row += 1;
    }

    if !records.is_empty() {
        row += 1;
        let values = [totals.income, totals.expense, totals.balance];
        for (label, value) in SUMMARY_LABELS.iter().zip(values) {
            widths[3] = widths[3].max(label.len());
            sheet.write_string(row, 3, *label)?;
            sheet.write_number(row, 4, to_number(value)?)?;
            row += 1;
        }
    }

    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, MIN_COLUMN_WIDTH.max((width + 2) as f64))?;
    }

    workbook
        .save_to_buffer()
        .context("Failed to assemble workbook")
}

/// Download filename carrying the generation timestamp.
pub fn export_filename(format: &str, now: NaiveDateTime) -> String {
    format!("financial_data_{}.{}", now.format("%Y%m%d_%H%M%S"), format)
}

fn to_number(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .with_context(|| format!("Amount '{}' is not representable as a number", value))
}
