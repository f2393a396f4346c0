//! Certificate number cleaning.
//!
//! PSA cert numbers are typed by hand, so the raw input may carry dashes,
//! spaces or a `#` prefix. Everything that is not an ASCII digit is dropped
//! and the remainder is left-padded with zeros to eight characters.

use std::fmt;

use crate::error::{PsaError, Result};

/// Minimum number of digits a cert number must carry to be looked up.
pub const CERT_MIN_DIGITS: usize = 8;

/// A cleaned, zero-padded certificate number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertNumber(String);

impl CertNumber {
    /// Clean `raw`, rejecting inputs with fewer than eight digits.
    ///
    /// ```
    /// use psa_collection::CertNumber;
    ///
    /// assert_eq!(CertNumber::parse("1234-5678").unwrap().as_str(), "12345678");
    /// assert!(CertNumber::parse("42").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let digits = digits_only(raw);
        if digits.len() < CERT_MIN_DIGITS {
            return Err(PsaError::InvalidCertFormat(format!(
                "'{raw}' has {} digits, expected at least {CERT_MIN_DIGITS}",
                digits.len()
            )));
        }
        Ok(Self(pad(digits)))
    }

    /// Clean `raw` without a minimum length check.
    pub fn lenient(raw: &str) -> Self {
        Self(pad(digits_only(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn pad(digits: String) -> String {
    format!("{digits:0>width$}", width = CERT_MIN_DIGITS)
}
