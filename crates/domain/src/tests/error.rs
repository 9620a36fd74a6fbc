// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use book_catalog_verification::VerificationError;
use std::error::Error;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingField { field: "author" };
    assert_eq!(format!("{err}"), "Missing required field: author");

    let err: DomainError = DomainError::InvalidPageCount { pages: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid page count: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::NegativePrice { amount: -1.5 };
    assert_eq!(
        format!("{err}"),
        "Invalid price: -1.5. Must be a finite amount of at least 0"
    );

    let err: DomainError = DomainError::InvalidCurrency(VerificationError::InvalidCurrency {
        code: String::from("abc"),
    });
    assert_eq!(
        format!("{err}"),
        "Invalid currency code: 'abc' is not an active ISO-4217 code"
    );
}

#[test]
fn test_invalid_currency_exposes_source() {
    let err: DomainError = DomainError::InvalidCurrency(VerificationError::InvalidCurrency {
        code: String::from("abc"),
    });
    assert!(err.source().is_some());

    let err: DomainError = DomainError::MissingField { field: "title" };
    assert!(err.source().is_none());
}
