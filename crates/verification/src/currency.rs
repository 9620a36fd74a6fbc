// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO-4217 currency code validation against a bundled table.

use crate::error::VerificationError;

/// Active ISO-4217 currency codes, including fund codes.
///
/// Precious metal and testing codes (`XAU`, `XTS`, `XXX`, ...) are not
/// currencies a book can be priced in and are left out.
///
/// Must stay sorted; lookups use binary search.
pub const ACTIVE_CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD",
    "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUP", "CVE", "CZK",
    "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS",
    "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD",
    "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD",
    "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT",
    "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK",
    "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD",
    "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SOS", "SRD", "SSP",
    "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS",
    "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES", "VND", "VUV", "WST",
    "XAF", "XCD", "XCG", "XOF", "XPF", "YER", "ZAR", "ZMW", "ZWG",
];

/// Returns `true` if `code` is an active ISO-4217 currency code.
///
/// Matching is exact: `"usd"` and `" USD"` are not valid.
#[must_use]
pub fn is_valid_currency(code: &str) -> bool {
    ACTIVE_CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Validates a currency code.
///
/// # Errors
///
/// Returns `VerificationError::InvalidCurrency` if `code` is not an active
/// ISO-4217 currency code.
pub fn validate_currency(code: &str) -> Result<(), VerificationError> {
    if is_valid_currency(code) {
        return Ok(());
    }
    Err(VerificationError::InvalidCurrency {
        code: code.to_string(),
    })
}
