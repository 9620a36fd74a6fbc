// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use book_catalog_domain::Book;

pub fn create_test_book() -> Book {
    Book::new("Jon Skeet", "C# in Depth", "Manning Publications")
}

pub fn create_book_with_pages(title: &str, pages: i64) -> Book {
    let mut book: Book = Book::new("Test Author", title, "Test Publisher");
    book.set_pages(pages).unwrap();
    book
}

pub fn create_book_with_price(title: &str, amount: f64) -> Book {
    let mut book: Book = Book::new("Test Author", title, "Test Publisher");
    book.set_price(amount, "USD").unwrap();
    book
}

/// Five books where two share the author "Jon Skeet", two share the title
/// "C# in Depth" and one has the publisher "Manning Publications".
pub fn create_find_fixture() -> Vec<Book> {
    vec![
        Book::new("", "", "Manning Publications"),
        Book::new("Jon Skeet", "", ""),
        Book::new("", "C# in Depth", ""),
        Book::new("", "", ""),
        Book::new("Jon Skeet", "C# in Depth", ""),
    ]
}

pub fn titles<'a>(books: &[&'a Book]) -> Vec<&'a str> {
    books.iter().map(|book| book.title()).collect()
}
