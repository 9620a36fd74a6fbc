// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Book;

pub fn create_test_book() -> Book {
    Book::new("Jon Skeet", "C# in Depth", "Manning Publications")
}

pub fn create_book_with_pages(author: &str, title: &str, pages: i64) -> Book {
    let mut book: Book = Book::new(author, title, "Test Publisher");
    book.set_pages(pages).unwrap();
    book
}

pub fn create_book_with_price(title: &str, amount: f64) -> Book {
    let mut book: Book = Book::new("Test Author", title, "Test Publisher");
    book.set_price(amount, "USD").unwrap();
    book
}

pub fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(Book::title).collect()
}
