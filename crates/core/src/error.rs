// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use book_catalog_domain::DomainError;

/// Errors raised by the book list service.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A book rule was violated.
    DomainViolation(DomainError),
    /// An equal book is already held.
    DuplicateBook {
        /// Display form of the rejected book.
        book: String,
    },
    /// No equal book is held.
    BookNotFound {
        /// Display form of the missing book.
        book: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DuplicateBook { book } => write!(f, "Book '{book}' is already stored"),
            Self::BookNotFound { book } => write!(f, "Book '{book}' is not in storage"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
