// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use book_catalog_domain::Book;

/// An in-memory list of books used for bulk load and save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookStorage {
    books: Vec<Book>,
}

impl BookStorage {
    /// Creates an empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Creates a storage holding `books`.
    #[must_use]
    pub const fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Returns the stored books in order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends books to the storage. Existing books are kept.
    pub fn add_books<I>(&mut self, books: I)
    where
        I: IntoIterator<Item = Book>,
    {
        self.books.extend(books);
    }

    /// Returns whether the storage holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the number of stored books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }
}

impl From<Vec<Book>> for BookStorage {
    fn from(books: Vec<Book>) -> Self {
        Self::from_books(books)
    }
}
