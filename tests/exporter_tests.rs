// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use calamine::{Data, Reader, Xlsx, open_workbook};
use cashbook::models::{NewRecord, RecordType};
use cashbook::{cli, commands::exporter, export, store};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;
        CREATE TABLE users(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE TABLE finance_records(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            record_date TEXT NOT NULL,
            record_type TEXT NOT NULL CHECK(record_type IN ('income','expense')),
            category TEXT NOT NULL,
            description TEXT,
            amount TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        INSERT INTO users(id, username) VALUES (1, 'tester');
        "#,
    )
    .unwrap();
    conn
}

fn add(conn: &mut Connection, date: &str, kind: RecordType, category: &str, amount: &str) {
    let record = NewRecord {
        record_date: date.parse().unwrap(),
        record_type: kind,
        category: category.into(),
        description: None,
        amount: amount.parse().unwrap(),
    };
    store::insert_record(conn, 1, &record).unwrap();
}

fn run_export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "cashbook", "export", "records", "--user", "tester", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range("Financial records").unwrap();
    range.rows().map(|r| r.to_vec()).collect()
}

fn cell_str(cell: &Data) -> &str {
    match cell {
        Data::String(s) => s,
        other => panic!("expected string cell, got {:?}", other),
    }
}

fn cell_num(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        other => panic!("expected number cell, got {:?}", other),
    }
}

#[test]
fn workbook_mirrors_records_and_totals() {
    let mut conn = setup();
    add(&mut conn, "2024-02-01", RecordType::Income, "salary", "1200.50");

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.xlsx");
    run_export(&conn, "xlsx", &out.to_string_lossy()).unwrap();

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 6); // header + 1 record + blank + 3 summary rows

    let header: Vec<&str> = rows[0].iter().map(cell_str).collect();
    assert_eq!(
        header,
        ["Date", "Type", "Category", "Description", "Amount", "Recorded at"]
    );

    assert_eq!(cell_str(&rows[1][0]), "2024-02-01");
    assert_eq!(cell_str(&rows[1][1]), "Income");
    assert_eq!(cell_str(&rows[1][2]), "salary");
    assert_eq!(cell_str(&rows[1][3]), "-");
    assert_eq!(cell_num(&rows[1][4]), 1200.50);
    // Recorded-at renders as date + hour:minute, no seconds.
    assert_eq!(cell_str(&rows[1][5]).len(), 16);

    assert!(rows[2].iter().all(|c| matches!(c, Data::Empty)));

    assert_eq!(cell_str(&rows[3][3]), "Total income");
    assert_eq!(cell_num(&rows[3][4]), 1200.50);
    assert_eq!(cell_str(&rows[4][3]), "Total expense");
    assert_eq!(cell_num(&rows[4][4]), 0.0);
    assert_eq!(cell_str(&rows[5][3]), "Balance");
    assert_eq!(cell_num(&rows[5][4]), 1200.50);
}

#[test]
fn empty_record_set_exports_header_row_only() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty.xlsx");
    run_export(&conn, "xlsx", &out.to_string_lossy()).unwrap();

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 1);
}

#[test]
fn row_count_scales_with_records() {
    let mut conn = setup();
    add(&mut conn, "2024-02-01", RecordType::Income, "salary", "10.00");
    add(&mut conn, "2024-02-02", RecordType::Expense, "food", "3.25");
    add(&mut conn, "2024-02-03", RecordType::Expense, "rent", "4.75");

    let dir = tempdir().unwrap();
    let out = dir.path().join("three.xlsx");
    run_export(&conn, "xlsx", &out.to_string_lossy()).unwrap();

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 8); // header + 3 records + blank + 3 summary rows
}

#[test]
fn unknown_format_is_rejected_without_output() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.unknown");
    assert!(run_export(&conn, "xml", &out.to_string_lossy()).is_err());
    assert!(!out.exists());
}

#[test]
fn csv_export_carries_the_record_rows() {
    let mut conn = setup();
    add(&mut conn, "2024-02-01", RecordType::Income, "salary", "1200.50");

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    run_export(&conn, "csv", &out.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "date,type,category,description,amount,recorded_at");
    assert!(lines[1].starts_with("2024-02-01,Income,salary,-,1200.50,"));
}

#[test]
fn json_export_serializes_the_records() {
    let mut conn = setup();
    add(&mut conn, "2024-02-01", RecordType::Income, "salary", "1200.50");

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.json");
    run_export(&conn, "json", &out.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed[0]["record_date"], "2024-02-01");
    assert_eq!(parsed[0]["record_type"], "income");
    assert_eq!(parsed[0]["category"], "salary");
    assert_eq!(parsed[0]["amount"], "1200.50");
}

#[test]
fn export_filename_carries_the_generation_timestamp() {
    let now = "2024-02-01"
        .parse::<chrono::NaiveDate>()
        .unwrap()
        .and_hms_opt(13, 5, 6)
        .unwrap();
    assert_eq!(
        export::export_filename("xlsx", now),
        "financial_data_20240201_130506.xlsx"
    );
}
