// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejection reasons for a record submission. Each variant carries the
/// message shown to the user; any single failure aborts the whole
/// submission before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Invalid date, expected YYYY-MM-DD")]
    InvalidDate,
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Invalid record type '{0}', expected 'income' or 'expense'")]
    InvalidRecordType(String),
    #[error("Category must be at most 120 characters")]
    CategoryTooLong,
}
