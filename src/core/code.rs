//! Secret code representation
//!
//! A Code stores four decimal digits. Leading zeros are significant, so "0007"
//! and "7" are different inputs (the latter is rejected).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digit positions in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes ("0000" through "9999")
pub const CODE_SPACE: usize = 10_000;

/// A 4-digit code, digits 0-9, repeats allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly 4 digits, got {0} characters")]
    InvalidLength(usize),
    #[error("Code may only contain digits 0-9, found '{0}'")]
    InvalidDigit(char),
}

impl Code {
    /// Build a code from its digit array
    ///
    /// # Errors
    /// Returns `CodeError::InvalidDigit` if any element is greater than 9.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            // Report the offending value the way it would have been typed
            let ch = char::from_digit(u32::from(bad), 36).unwrap_or('?');
            return Err(CodeError::InvalidDigit(ch));
        }
        Ok(Self(digits))
    }

    /// Parse a code from text
    ///
    /// Surrounding whitespace is ignored; everything else must be exactly four
    /// ASCII digits.
    ///
    /// # Errors
    /// Returns `CodeError` if the length is wrong or a non-digit is present.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Code;
    ///
    /// let code = Code::parse("0429").unwrap();
    /// assert_eq!(code.to_string(), "0429");
    ///
    /// assert!(Code::parse("12a3").is_err());
    /// assert!(Code::parse("7").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let text = text.trim();
        let count = text.chars().count();
        if count != CODE_LENGTH {
            return Err(CodeError::InvalidLength(count));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(CodeError::InvalidDigit(ch))?;
            *slot = value as u8;
        }

        Ok(Self(digits))
    }

    /// Build the code with the given dense index (0-9999)
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 10_000`
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        debug_assert!((index as usize) < CODE_SPACE, "Code index must be < 10000");
        Self([
            (index / 1000 % 10) as u8,
            (index / 100 % 10) as u8,
            (index / 10 % 10) as u8,
            (index % 10) as u8,
        ])
    }

    /// Dense index of this code (the code read as a decimal number)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0[0] as u16 * 1000 + self.0[1] as u16 * 100 + self.0[2] as u16 * 10 + self.0[3] as u16
    }

    /// Every code in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_SPACE as u16).map(Self::from_index)
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("4321").unwrap();
        assert_eq!(code.digits(), &[4, 3, 2, 1]);
        assert_eq!(code.to_string(), "4321");
    }

    #[test]
    fn code_parse_keeps_leading_zeros() {
        let code = Code::parse("0007").unwrap();
        assert_eq!(code.digits(), &[0, 0, 0, 7]);
        assert_eq!(code.to_string(), "0007");
        assert_eq!(code.index(), 7);
    }

    #[test]
    fn code_parse_trims_whitespace() {
        assert_eq!(Code::parse("  1234\n").unwrap().to_string(), "1234");
    }

    #[test]
    fn code_parse_invalid_length() {
        assert_eq!(Code::parse("7"), Err(CodeError::InvalidLength(1)));
        assert_eq!(Code::parse("12345"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_parse_invalid_digit() {
        assert_eq!(Code::parse("12a3"), Err(CodeError::InvalidDigit('a')));
        assert_eq!(Code::parse("1 23"), Err(CodeError::InvalidDigit(' ')));
        assert_eq!(Code::parse("-123"), Err(CodeError::InvalidDigit('-')));
        // Non-ASCII digits are not decimal digits for our purposes
        assert!(Code::parse("１２３４").is_err());
    }

    #[test]
    fn code_from_str_matches_parse() {
        let code: Code = "9081".parse().unwrap();
        assert_eq!(code, Code::parse("9081").unwrap());
    }

    #[test]
    fn code_from_digits_rejects_out_of_range() {
        assert!(Code::from_digits([1, 2, 3, 4]).is_ok());
        assert_eq!(
            Code::from_digits([1, 2, 10, 4]),
            Err(CodeError::InvalidDigit('a'))
        );
    }

    #[test]
    fn code_index_round_trip_bounds() {
        assert_eq!(Code::from_index(0).to_string(), "0000");
        assert_eq!(Code::from_index(9999).to_string(), "9999");
        assert_eq!(Code::from_index(420).to_string(), "0420");
        assert_eq!(Code::parse("0420").unwrap().index(), 420);
    }

    #[test]
    fn code_all_covers_space() {
        let all: Vec<Code> = Code::all().collect();
        assert_eq!(all.len(), CODE_SPACE);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn code_digit_at() {
        let code = Code::parse("5067").unwrap();
        assert_eq!(code.digit_at(0), 5);
        assert_eq!(code.digit_at(1), 0);
        assert_eq!(code.digit_at(3), 7);
    }
}
