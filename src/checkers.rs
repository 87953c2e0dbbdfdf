use crate::character_sets::{CharClass, CharTable};
use crate::error::Result;
use crate::input::{CodeUnit, ScanInput};

/// Position of the leftmost unit not in `table`.
/// Stops at the first violation; empty input is always valid.
#[inline]
pub fn index_of_invalid<U: CodeUnit>(table: &CharTable, units: &[U]) -> Option<usize> {
    units.iter().position(|&unit| !table.contains_unit(unit))
}

/// Index of the first character outside the authority class.
/// Used on the raw request-target authority or `Host` header value.
#[inline]
pub fn index_of_invalid_authority_char<I: ScanInput + ?Sized>(input: &I) -> Option<usize> {
    CharClass::Authority.index_of_invalid(input)
}

/// Check if the authority contains any invalid character
#[inline]
pub fn contains_invalid_authority_char<I: ScanInput + ?Sized>(input: &I) -> bool {
    index_of_invalid_authority_char(input).is_some()
}

/// Index of the first character outside the host class (bare host name,
/// userinfo and port already stripped)
#[inline]
pub fn index_of_invalid_host_char<I: ScanInput + ?Sized>(input: &I) -> Option<usize> {
    CharClass::Host.index_of_invalid(input)
}

/// Index of the first non-`tchar` (header field names)
#[inline]
pub fn index_of_invalid_token_char<I: ScanInput + ?Sized>(input: &I) -> Option<usize> {
    CharClass::Token.index_of_invalid(input)
}

/// Index of the first character outside VCHAR / SP.
/// Obsolete line folding must be handled by the caller before scanning.
#[inline]
pub fn index_of_invalid_field_value_char<I: ScanInput + ?Sized>(input: &I) -> Option<usize> {
    CharClass::FieldValue.index_of_invalid(input)
}

/// # Errors
///
/// Returns the position and unit of the first invalid authority character.
pub fn validate_authority<I: ScanInput + ?Sized>(input: &I) -> Result<()> {
    CharClass::Authority.validate(input)
}

/// # Errors
///
/// Returns the position and unit of the first invalid host character.
pub fn validate_host<I: ScanInput + ?Sized>(input: &I) -> Result<()> {
    CharClass::Host.validate(input)
}

/// # Errors
///
/// Returns the position and unit of the first non-`tchar`.
pub fn validate_token<I: ScanInput + ?Sized>(input: &I) -> Result<()> {
    CharClass::Token.validate(input)
}

/// # Errors
///
/// Returns the position and unit of the first invalid field-value character.
pub fn validate_field_value<I: ScanInput + ?Sized>(input: &I) -> Result<()> {
    CharClass::FieldValue.validate(input)
}
