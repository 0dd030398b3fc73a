// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ValidationError;
use crate::models::{NewRecord, RecordType};

pub const CATEGORY_MAX_LEN: usize = 120;

/// Raw form fields of a record submission, untrimmed.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionForm<'a> {
    pub date: &'a str,
    pub record_type: &'a str,
    pub category: &'a str,
    pub description: Option<&'a str>,
    pub amount: &'a str,
}

/// Parse a user-supplied amount into a positive currency value with exactly
/// two fractional digits. Ties round away from zero.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount)?;
    let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    amount.rescale(2);
    Ok(amount)
}

/// Parse a calendar date in strict `YYYY-MM-DD` form. The round-trip check
/// rejects unpadded inputs chrono would otherwise accept.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    let date =
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    if date.format("%Y-%m-%d").to_string() != raw {
        return Err(ValidationError::InvalidDate);
    }
    Ok(date)
}

pub fn parse_record_type(raw: &str) -> Result<RecordType, ValidationError> {
    raw.trim().parse()
}

/// All-or-nothing validation gate: any single failing field rejects the
/// whole submission before any persistence is attempted.
pub fn validate_submission(form: &SubmissionForm) -> Result<NewRecord, ValidationError> {
    let record_type = parse_record_type(form.record_type)?;

    let date = form.date.trim();
    let category = form.category.trim();
    let amount = form.amount.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingField("date"));
    }
    if category.is_empty() {
        return Err(ValidationError::MissingField("category"));
    }
    if amount.is_empty() {
        return Err(ValidationError::MissingField("amount"));
    }
    if category.chars().count() > CATEGORY_MAX_LEN {
        return Err(ValidationError::CategoryTooLong);
    }

    let amount = parse_amount(amount)?;
    let record_date = parse_date(date)?;
    let description = form
        .description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(NewRecord {
        record_date,
        record_type,
        category: category.to_string(),
        description,
        amount,
    })
}
