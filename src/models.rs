// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Income => "income",
            RecordType::Expense => "expense",
        }
    }

    /// Human-readable label used in listings and exports.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Income => "Income",
            RecordType::Expense => "Expense",
        }
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(RecordType::Income),
            "expense" => Ok(RecordType::Expense),
            other => Err(ValidationError::InvalidRecordType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub record_date: NaiveDate,
    pub record_type: RecordType,
    pub category: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// A validated submission, ready to be persisted. Id and creation timestamp
/// are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub record_date: NaiveDate,
    pub record_type: RecordType,
    pub category: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

/// Aggregate totals for one user. Derived on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
