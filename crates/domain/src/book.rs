// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `Book` value type.
//!
//! A book has four identity fields fixed at construction (author, title,
//! publisher, ISBN) and three pieces of mutable state (page count, price
//! with currency, publication). Only the identity fields take part in
//! equality and hashing.

use crate::error::DomainError;
use crate::types::{Currency, Isbn, Price, Publication};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Date;
use tracing::debug;

/// A book in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    author: String,
    title: String,
    publisher: String,
    isbn: Option<Isbn>,
    pages: Option<u32>,
    price: Option<Price>,
    currency: Option<Currency>,
    publication: Publication,
}

// Identity is author, title, publisher and ISBN; pages, price and
// publication state are ignored.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.author == other.author
            && self.title == other.title
            && self.publisher == other.publisher
            && self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl std::hash::Hash for Book {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.author.hash(state);
        self.title.hash(state);
        self.publisher.hash(state);
        self.isbn.hash(state);
    }
}

impl Book {
    /// Creates a book without an ISBN.
    ///
    /// Empty strings are accepted and stand for "unknown".
    ///
    /// # Arguments
    ///
    /// * `author` - The author
    /// * `title` - The title
    /// * `publisher` - The publisher
    #[must_use]
    pub fn new(author: &str, title: &str, publisher: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            publisher: publisher.to_string(),
            isbn: None,
            pages: None,
            price: None,
            currency: None,
            publication: Publication::NotYetPublished,
        }
    }

    /// Creates a book with an ISBN.
    ///
    /// An empty or invalid `isbn` is discarded and the book has no ISBN;
    /// this is not an error.
    #[must_use]
    pub fn with_isbn(author: &str, title: &str, publisher: &str, isbn: &str) -> Self {
        let mut book: Self = Self::new(author, title, publisher);
        book.isbn = Isbn::parse(isbn);
        if book.isbn.is_none() && !isbn.is_empty() {
            debug!(isbn, title, "Discarding invalid ISBN");
        }
        book
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the publisher.
    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Returns the ISBN, if a valid one was supplied.
    #[must_use]
    pub const fn isbn(&self) -> Option<&Isbn> {
        self.isbn.as_ref()
    }

    /// Returns the page count, if set.
    #[must_use]
    pub const fn pages(&self) -> Option<u32> {
        self.pages
    }

    /// Returns the price, if set.
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns the currency, if set.
    #[must_use]
    pub const fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    /// Returns the publication state.
    #[must_use]
    pub const fn publication(&self) -> Publication {
        self.publication
    }

    /// Returns whether the book has been published.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.publication.is_published()
    }

    /// Returns the publication date, if published.
    #[must_use]
    pub const fn date_published(&self) -> Option<Date> {
        self.publication.date()
    }

    /// Sets the page count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPageCount` if `pages` is not positive or
    /// does not fit a `u32`.
    pub fn set_pages(&mut self, pages: i64) -> Result<(), DomainError> {
        let count: u32 = u32::try_from(pages)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(DomainError::InvalidPageCount { pages })?;
        self.pages = Some(count);
        Ok(())
    }

    /// Sets the price and currency together.
    ///
    /// Both are validated before either is stored, so a failed call leaves
    /// the previous price and currency in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is negative or not finite
    /// - `currency` is not an active ISO-4217 code
    pub fn set_price(&mut self, amount: f64, currency: &str) -> Result<(), DomainError> {
        self.set_price_checked(amount, Some(currency))
    }

    /// Sets the price from a possibly absent currency code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if `currency` is `None`, otherwise
    /// the same errors as [`Book::set_price`]. The amount is checked first.
    pub fn set_price_checked(
        &mut self,
        amount: f64,
        currency: Option<&str>,
    ) -> Result<(), DomainError> {
        let price: Price = Price::new(amount)?;
        let code: &str = currency.ok_or(DomainError::MissingField { field: "currency" })?;
        let currency: Currency = Currency::new(code)?;
        self.price = Some(price);
        self.currency = Some(currency);
        Ok(())
    }

    /// Marks the book as published on `date`.
    ///
    /// Publishing an already published book replaces its date.
    pub fn publish(&mut self, date: Date) {
        debug!(title = %self.title, %date, "Publishing book");
        self.publication = Publication::Published(date);
    }

    /// Returns the publication date as `MM/DD/YYYY`, or `NYP` if the book
    /// is not yet published.
    #[must_use]
    pub fn publication_date(&self) -> String {
        self.publication.format()
    }

    /// Orders books by title length, shortest first.
    ///
    /// Titles of equal length compare `Equal` even when their text differs,
    /// so this is not consistent with `Eq` and `Book` does not implement
    /// `Ord`.
    #[must_use]
    pub fn compare_title(&self, other: &Self) -> Ordering {
        self.title.len().cmp(&other.title.len())
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Unvalidated book input, e.g. from a deserialized document.
///
/// Every field is optional so that absence can be reported as
/// `DomainError::MissingField` when converting into a [`Book`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// The author.
    pub author: Option<String>,
    /// The title.
    pub title: Option<String>,
    /// The publisher.
    pub publisher: Option<String>,
    /// The ISBN; invalid values are dropped during conversion.
    pub isbn: Option<String>,
}

impl BookRecord {
    /// Creates a record with the three required fields present.
    #[must_use]
    pub fn new(author: &str, title: &str, publisher: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            title: Some(title.to_string()),
            publisher: Some(publisher.to_string()),
            isbn: None,
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = DomainError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let author: String = record
            .author
            .ok_or(DomainError::MissingField { field: "author" })?;
        let title: String = record
            .title
            .ok_or(DomainError::MissingField { field: "title" })?;
        let publisher: String = record
            .publisher
            .ok_or(DomainError::MissingField { field: "publisher" })?;

        Ok(match record.isbn {
            Some(isbn) => Self::with_isbn(&author, &title, &publisher, &isbn),
            None => Self::new(&author, &title, &publisher),
        })
    }
}
