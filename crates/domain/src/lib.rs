// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod book;
mod comparators;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use book::{Book, BookRecord};
pub use comparators::{BookComparator, by_author, by_pages, by_price, by_title};

// Re-export public types
pub use error::DomainError;
pub use types::{Currency, Isbn, NOT_YET_PUBLISHED, Price, Publication};

pub use book_catalog_verification::IsbnKind;
