// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordering strategies over books.
//!
//! Each function has the shape `fn(&Book, &Book) -> Ordering` and can be
//! passed directly to `slice::sort_by`, which is stable.

use crate::book::Book;
use std::cmp::Ordering;

/// Orders by author using ordinal (byte-wise) comparison.
#[must_use]
pub fn by_author(a: &Book, b: &Book) -> Ordering {
    a.author().cmp(b.author())
}

/// Orders by page count, ascending. Books without a page count come first.
#[must_use]
pub fn by_pages(a: &Book, b: &Book) -> Ordering {
    a.pages().cmp(&b.pages())
}

/// Orders by price amount, ascending. Books without a price come first.
///
/// Currency is not considered.
#[must_use]
pub fn by_price(a: &Book, b: &Book) -> Ordering {
    match (a.price(), b.price()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(y),
    }
}

/// Orders by title length; see [`Book::compare_title`].
#[must_use]
pub fn by_title(a: &Book, b: &Book) -> Ordering {
    a.compare_title(b)
}

/// A sort strategy selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookComparator {
    /// See [`by_author`].
    Author,
    /// See [`by_pages`].
    Pages,
    /// See [`by_price`].
    Price,
    /// See [`by_title`].
    Title,
}

impl BookComparator {
    /// Compares two books with this strategy.
    #[must_use]
    pub fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            Self::Author => by_author(a, b),
            Self::Pages => by_pages(a, b),
            Self::Price => by_price(a, b),
            Self::Title => by_title(a, b),
        }
    }
}

impl std::fmt::Display for BookComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Author => "author",
            Self::Pages => "pages",
            Self::Price => "price",
            Self::Title => "title",
        };
        f.write_str(name)
    }
}
