// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use book_catalog_verification::VerificationError;

/// Errors raised when a book's fields violate their rules.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required field was not supplied.
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// Page count must be a positive integer.
    InvalidPageCount {
        /// The rejected value.
        pages: i64,
    },
    /// Price must be a finite, non-negative amount.
    NegativePrice {
        /// The rejected amount.
        amount: f64,
    },
    /// The currency code failed ISO-4217 validation.
    InvalidCurrency(VerificationError),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::InvalidPageCount { pages } => {
                write!(f, "Invalid page count: {pages}. Must be greater than 0")
            }
            Self::NegativePrice { amount } => {
                write!(
                    f,
                    "Invalid price: {amount}. Must be a finite amount of at least 0"
                )
            }
            Self::InvalidCurrency(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCurrency(err) => Some(err),
            _ => None,
        }
    }
}
