// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISBN-10 and ISBN-13 checksum validation.
//!
//! Only the hyphenated forms are recognized: 13 characters for an ISBN-10
//! (`99921-58-10-7`) and 17 characters for an ISBN-13 (`978-3-16-148410-0`).
//! The empty string is accepted and means "no ISBN supplied".

use crate::error::VerificationError;

/// Length of a hyphenated ISBN-10.
const ISBN10_HYPHENATED_LEN: usize = 13;

/// Length of a hyphenated ISBN-13.
const ISBN13_HYPHENATED_LEN: usize = 17;

/// The checksum scheme a code satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnKind {
    /// Ten characters, weighted mod-11 checksum, `X` allowed as check character.
    Isbn10,
    /// Thirteen digits, alternating 1/3 weighted mod-10 checksum.
    Isbn13,
}

/// Returns `true` if `code` is empty or a valid hyphenated ISBN-10/ISBN-13.
///
/// Malformed input never produces an error; it is simply not valid.
#[must_use]
pub fn is_valid_isbn(code: &str) -> bool {
    code.is_empty() || isbn_kind(code).is_some()
}

/// Determines which ISBN scheme a non-empty code satisfies.
///
/// Returns `None` for the empty string and for any code that fails its
/// length, character or checksum rules.
#[must_use]
pub fn isbn_kind(code: &str) -> Option<IsbnKind> {
    match code.len() {
        ISBN10_HYPHENATED_LEN if is_valid_isbn10(code) => Some(IsbnKind::Isbn10),
        ISBN13_HYPHENATED_LEN if is_valid_isbn13(code) => Some(IsbnKind::Isbn13),
        _ => None,
    }
}

/// Validates an ISBN, returning an error instead of `false`.
///
/// # Errors
///
/// Returns `VerificationError::InvalidIsbn` if the code is neither empty nor
/// a valid ISBN-10/ISBN-13.
pub fn validate_isbn(code: &str) -> Result<(), VerificationError> {
    if is_valid_isbn(code) {
        Ok(())
    } else {
        Err(VerificationError::InvalidIsbn {
            code: code.to_string(),
        })
    }
}

fn strip_hyphens(code: &str) -> Vec<char> {
    code.chars().filter(|c| *c != '-').collect()
}

fn is_valid_isbn10(code: &str) -> bool {
    let chars: Vec<char> = strip_hyphens(code);
    let Some((check, body)) = chars.split_last() else {
        return false;
    };
    if body.len() != 9 {
        return false;
    }

    let check_value: u32 = match check {
        'X' => 10,
        c => match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        },
    };

    let mut sum: u32 = 0;
    for (weight, c) in (1..).zip(body) {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += digit * weight;
    }

    sum % 11 == check_value
}

fn is_valid_isbn13(code: &str) -> bool {
    let chars: Vec<char> = strip_hyphens(code);
    if chars.len() != 13 {
        return false;
    }

    let mut digits: Vec<u32> = Vec::with_capacity(13);
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        digits.push(digit);
    }

    let Some((check, body)) = digits.split_last() else {
        return false;
    };

    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    (10 - sum % 10) % 10 == *check
}
