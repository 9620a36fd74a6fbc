// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_book;
use crate::{BookListService, BookStorage, CoreError};
use book_catalog_domain::{Book, BookRecord, DomainError};
use time::macros::date;

#[test]
fn test_new_service_is_empty() {
    let service: BookListService = BookListService::new();
    assert!(service.is_empty());
    assert_eq!(service.len(), 0);
}

#[test]
fn test_add_book() {
    let mut service: BookListService = BookListService::new();
    service.add(create_test_book()).unwrap();

    assert!(!service.is_empty());
    assert!(service.contains(&create_test_book()));
}

#[test]
fn test_add_same_book_twice_fails() {
    let mut service: BookListService = BookListService::new();
    service.add(create_test_book()).unwrap();

    let result: Result<(), CoreError> = service.add(create_test_book());
    assert_eq!(
        result,
        Err(CoreError::DuplicateBook {
            book: String::from("C# in Depth by Jon Skeet")
        })
    );
    assert_eq!(service.len(), 1);
}

#[test]
fn test_add_rejects_book_differing_only_in_mutable_state() {
    let mut service: BookListService = BookListService::new();
    service.add(create_test_book()).unwrap();

    let mut published: Book = create_test_book();
    published.publish(date!(2019 - 03 - 07));
    published.set_pages(528).unwrap();

    assert!(matches!(
        service.add(published),
        Err(CoreError::DuplicateBook { .. })
    ));
}

#[test]
fn test_add_keeps_insertion_order() {
    let mut service: BookListService = BookListService::new();
    service.add(Book::new("A", "First", "P")).unwrap();
    service.add(Book::new("B", "Second", "P")).unwrap();
    service.add(Book::new("C", "Third", "P")).unwrap();

    let titles: Vec<&str> = service.books().iter().map(Book::title).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn test_add_record() {
    let mut service: BookListService = BookListService::new();
    service
        .add_record(BookRecord::new(
            "Jon Skeet",
            "C# in Depth",
            "Manning Publications",
        ))
        .unwrap();
    assert!(service.contains(&create_test_book()));
}

#[test]
fn test_add_record_missing_field_is_domain_violation() {
    let mut service: BookListService = BookListService::new();
    let record: BookRecord = BookRecord {
        publisher: None,
        ..BookRecord::new("Jon Skeet", "C# in Depth", "Manning Publications")
    };

    assert_eq!(
        service.add_record(record),
        Err(CoreError::DomainViolation(DomainError::MissingField {
            field: "publisher"
        }))
    );
    assert!(service.is_empty());
}

#[test]
fn test_remove_book() {
    let mut service: BookListService = BookListService::new();
    service.add(create_test_book()).unwrap();

    let removed: Book = service.remove(&create_test_book()).unwrap();
    assert_eq!(removed, create_test_book());
    assert!(service.is_empty());
}

#[test]
fn test_remove_unknown_book_fails() {
    let mut service: BookListService = BookListService::new();
    service.add(Book::new("", "", "")).unwrap();

    let result: Result<Book, CoreError> = service.remove(&create_test_book());
    assert_eq!(
        result,
        Err(CoreError::BookNotFound {
            book: String::from("C# in Depth by Jon Skeet")
        })
    );
    assert_eq!(service.len(), 1);
}

#[test]
fn test_remove_from_empty_service_fails() {
    let mut service: BookListService = BookListService::new();
    assert!(matches!(
        service.remove(&create_test_book()),
        Err(CoreError::BookNotFound { .. })
    ));
}

#[test]
fn test_remove_takes_first_of_unchecked_duplicates() {
    let mut first: Book = create_test_book();
    first.set_pages(1).unwrap();
    let mut second: Book = create_test_book();
    second.set_pages(2).unwrap();

    let mut service: BookListService = BookListService::new();
    service.load_unchecked(&BookStorage::from_books(vec![first, second]));

    let removed: Book = service.remove(&create_test_book()).unwrap();
    assert_eq!(removed.pages(), Some(1));
    assert_eq!(service.books().first().and_then(Book::pages), Some(2));
}

#[test]
fn test_remove_then_add_again() {
    let mut service: BookListService = BookListService::new();
    service.add(create_test_book()).unwrap();
    service.remove(&create_test_book()).unwrap();
    service.add(create_test_book()).unwrap();
    assert_eq!(service.len(), 1);
}
