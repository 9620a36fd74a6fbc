// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use book_catalog_verification::{IsbnKind, isbn_kind, validate_currency};
use serde::{Deserialize, Serialize};
use time::Date;

/// Sentinel returned for a book that has not been published.
pub const NOT_YET_PUBLISHED: &str = "NYP";

/// A validated, non-empty International Standard Book Number.
///
/// The original hyphenated text is kept as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Isbn {
    /// The hyphenated code.
    code: String,
    /// Which checksum scheme the code satisfies.
    kind: IsbnKind,
}

impl Isbn {
    /// Parses an ISBN-10 or ISBN-13 code.
    ///
    /// Returns `None` for the empty string and for any code that fails
    /// validation.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        isbn_kind(code).map(|kind| Self {
            code: code.to_string(),
            kind,
        })
    }

    /// Returns the code as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the checksum scheme of this code.
    #[must_use]
    pub const fn kind(&self) -> IsbnKind {
        self.kind
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.code
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// An active ISO-4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from an ISO-4217 code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrency` if the code is not an active
    /// ISO-4217 code.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        Self::try_from(code.to_string())
    }

    /// Returns the three-letter code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        validate_currency(&code).map_err(DomainError::InvalidCurrency)?;
        Ok(Self(code))
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finite, non-negative price amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Price(f64);

impl Price {
    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativePrice` if `amount` is negative, NaN or
    /// infinite.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::NegativePrice { amount });
        }
        // Folds -0.0 into 0.0 so equal amounts order and serialize alike.
        Ok(Self(amount + 0.0))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Total ordering over amounts.
    #[must_use]
    pub fn total_cmp(self, other: Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Publication state of a book.
///
/// Once published a book stays published; publishing again only replaces
/// the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Publication {
    /// Not yet published.
    #[default]
    NotYetPublished,
    /// Published on the given date.
    Published(Date),
}

impl Publication {
    /// Returns whether the book has been published.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }

    /// Returns the publication date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        match self {
            Self::NotYetPublished => None,
            Self::Published(date) => Some(*date),
        }
    }

    /// Renders the publication state as `MM/DD/YYYY`, or `NYP`.
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::NotYetPublished => String::from(NOT_YET_PUBLISHED),
            Self::Published(date) => format!(
                "{:02}/{:02}/{:04}",
                u8::from(date.month()),
                date.day(),
                date.year()
            ),
        }
    }
}
