// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standalone validators for the two identifier formats the catalog accepts:
//! ISBN-10/ISBN-13 numbers and ISO-4217 currency codes.
//!
//! Both validators are pure functions over `&str` with fixed rules.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod currency;
mod error;
mod isbn;

#[cfg(test)]
mod tests;

pub use currency::{ACTIVE_CURRENCY_CODES, is_valid_currency, validate_currency};
pub use error::VerificationError;
pub use isbn::{IsbnKind, is_valid_isbn, isbn_kind, validate_isbn};
