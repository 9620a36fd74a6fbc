// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Validation failures for catalog identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The code is not an active ISO-4217 currency code.
    #[error("Invalid currency code: '{code}' is not an active ISO-4217 code")]
    InvalidCurrency { code: String },

    /// The code is neither empty nor a valid ISBN-10 or ISBN-13.
    #[error("Invalid ISBN: '{code}'")]
    InvalidIsbn { code: String },
}
