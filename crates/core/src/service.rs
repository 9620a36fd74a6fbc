// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::storage::BookStorage;
use book_catalog_domain::{Book, BookComparator, BookRecord};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// An insertion-ordered collection of books.
///
/// `add` keeps the held books unique under `Book` equality. The bulk
/// import `load_unchecked` does not, and says so in its name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListService {
    books: Vec<Book>,
}

impl BookListService {
    /// Creates an empty service.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Returns the held books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns whether no books are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the number of held books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether a book equal to `book` is held.
    #[must_use]
    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Adds a book.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateBook` if an equal book is already held.
    pub fn add(&mut self, book: Book) -> Result<(), CoreError> {
        if self.contains(&book) {
            return Err(CoreError::DuplicateBook {
                book: book.to_string(),
            });
        }
        debug!(%book, position = self.books.len(), "Adding book");
        self.books.push(book);
        Ok(())
    }

    /// Builds a book from an input record and adds it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the record is missing a
    /// required field, or `CoreError::DuplicateBook` as for [`Self::add`].
    pub fn add_record(&mut self, record: BookRecord) -> Result<(), CoreError> {
        let book: Book = Book::try_from(record)?;
        self.add(book)
    }

    /// Removes the first book equal to `book` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::BookNotFound` if no equal book is held.
    pub fn remove(&mut self, book: &Book) -> Result<Book, CoreError> {
        let Some(position) = self.books.iter().position(|held| held == book) else {
            return Err(CoreError::BookNotFound {
                book: book.to_string(),
            });
        };
        debug!(%book, position, "Removing book");
        Ok(self.books.remove(position))
    }

    /// Returns all books by exactly `author`, in insertion order.
    #[must_use]
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.find_by(|book| book.author() == author)
    }

    /// Returns all books titled exactly `title`, in insertion order.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        self.find_by(|book| book.title() == title)
    }

    /// Returns all books from exactly `publisher`, in insertion order.
    #[must_use]
    pub fn find_by_publisher(&self, publisher: &str) -> Vec<&Book> {
        self.find_by(|book| book.publisher() == publisher)
    }

    fn find_by<F>(&self, predicate: F) -> Vec<&Book>
    where
        F: Fn(&Book) -> bool,
    {
        let found: Vec<&Book> = self.books.iter().filter(|book| predicate(book)).collect();
        debug!(matches = found.len(), "Find completed");
        found
    }

    /// Returns all books stably sorted by `comparator`.
    ///
    /// Books that compare equal keep their insertion order.
    #[must_use]
    pub fn get_sorted(&self, comparator: BookComparator) -> Vec<&Book> {
        let mut sorted: Vec<&Book> = self.books.iter().collect();
        sorted.sort_by(|a, b| comparator.compare(a, b));
        debug!(%comparator, count = sorted.len(), "Sorted books");
        sorted
    }

    /// Returns all books sorted by author.
    #[must_use]
    pub fn get_by_author(&self) -> Vec<&Book> {
        self.get_sorted(BookComparator::Author)
    }

    /// Returns all books sorted by page count.
    #[must_use]
    pub fn get_by_pages(&self) -> Vec<&Book> {
        self.get_sorted(BookComparator::Pages)
    }

    /// Returns all books sorted by price.
    #[must_use]
    pub fn get_by_price(&self) -> Vec<&Book> {
        self.get_sorted(BookComparator::Price)
    }

    /// Returns all books sorted by title length.
    #[must_use]
    pub fn get_by_title(&self) -> Vec<&Book> {
        self.get_sorted(BookComparator::Title)
    }

    /// Appends every book in `storage` without checking for duplicates.
    ///
    /// Returns the number of books appended.
    pub fn load_unchecked(&mut self, storage: &BookStorage) -> usize {
        let duplicates: usize = storage
            .books()
            .iter()
            .filter(|book| self.contains(book))
            .count();
        if duplicates > 0 {
            warn!(duplicates, "Unchecked load is adding duplicate books");
        }

        self.books.extend_from_slice(storage.books());
        info!(
            loaded = storage.len(),
            total = self.books.len(),
            "Loaded books without duplicate check"
        );
        storage.len()
    }

    /// Appends every book in `storage` under the same rule as [`Self::add`].
    ///
    /// Either every book is added or none is.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateBook` naming the first book that is
    /// already held or appears earlier in the same storage.
    pub fn load_checked(&mut self, storage: &BookStorage) -> Result<usize, CoreError> {
        {
            let held: HashSet<&Book> = self.books.iter().collect();
            let mut seen: HashSet<&Book> = HashSet::with_capacity(storage.len());
            for book in storage.books() {
                if held.contains(book) || !seen.insert(book) {
                    return Err(CoreError::DuplicateBook {
                        book: book.to_string(),
                    });
                }
            }
        }

        self.books.extend_from_slice(storage.books());
        info!(
            loaded = storage.len(),
            total = self.books.len(),
            "Loaded books"
        );
        Ok(storage.len())
    }

    /// Appends copies of all held books to `storage`.
    ///
    /// Returns the number of books saved.
    pub fn save(&self, storage: &mut BookStorage) -> usize {
        storage.add_books(self.books.iter().cloned());
        info!(
            saved = self.books.len(),
            stored = storage.len(),
            "Saved books"
        );
        self.books.len()
    }
}
