use crate::checkers::index_of_invalid;
use crate::error::{InvalidCharError, Result};
use crate::input::{CodeUnit, ScanInput};

/// Number of entries in every classification table (7-bit ASCII)
pub const TABLE_SIZE: usize = 128;

/// Boolean membership table over the ASCII range.
/// Values at or above `TABLE_SIZE` are never members.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CharTable([bool; TABLE_SIZE]);

impl CharTable {
    /// Check if an ASCII byte is a member (bytes >= 0x80 never are)
    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        (b as usize) < TABLE_SIZE && self.0[b as usize]
    }

    /// Check membership for any code unit width
    #[inline]
    pub fn contains_unit<U: CodeUnit>(&self, unit: U) -> bool {
        unit.to_ascii().is_some_and(|b| self.0[b as usize])
    }

    /// Iterate over member bytes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..TABLE_SIZE as u8).filter(|&b| self.0[b as usize])
    }
}

impl core::fmt::Debug for CharTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

/// Set every byte in `extra` on a copy of `seed`
const fn with(seed: [bool; TABLE_SIZE], extra: &[u8]) -> [bool; TABLE_SIZE] {
    let mut table = seed;
    let mut i = 0;
    while i < extra.len() {
        table[extra[i] as usize] = true;
        i += 1;
    }
    table
}

/// ALPHA and DIGIT (RFC 5234 appendix B.1), shared by authority, host and token
const ALPHA_NUMERIC: [bool; TABLE_SIZE] = {
    let mut table = [false; TABLE_SIZE];

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }

    table
};

/// Authority characters (RFC 3986 section 3.2), for raw values such as
/// `example.com`, `host:8080`, `[::1]:8080`, `127.0.0.1`, `user:pass@host.com`
pub static AUTHORITY: CharTable = CharTable(with(ALPHA_NUMERIC, b":.[]@"));

/// Host characters accepted by Http.Sys: RFC 3986 reg-name minus
/// `*` `+` `,` `;` `=` and percent-encoded triplets
pub static HOST: CharTable = CharTable(with(ALPHA_NUMERIC, b"!$&'()-._~"));

/// tchar (RFC 7230 appendix B)
pub static TOKEN: CharTable = CharTable(with(ALPHA_NUMERIC, b"!#$%&'*+-.^_`|~"));

/// field-value (RFC 7230 section 3.2): VCHAR and SP
pub static FIELD_VALUE: CharTable = CharTable({
    let mut table = [false; TABLE_SIZE];
    let mut i = 0x20;
    while i <= 0x7E {
        table[i] = true;
        i += 1;
    }
    table
});

/// The four HTTP character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `host[:port]` with optional userinfo and bracketed IPv6 literal
    Authority,
    /// Bare host name after the authority has been decomposed
    Host,
    /// Header field names and other `tchar` tokens
    Token,
    /// Header field values
    FieldValue,
}

impl CharClass {
    /// Every class, in declaration order
    pub const ALL: [Self; 4] = [Self::Authority, Self::Host, Self::Token, Self::FieldValue];

    /// Get the lookup table backing this class
    pub fn table(self) -> &'static CharTable {
        match self {
            Self::Authority => &AUTHORITY,
            Self::Host => &HOST,
            Self::Token => &TOKEN,
            Self::FieldValue => &FIELD_VALUE,
        }
    }

    /// Lowercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Authority => "authority",
            Self::Host => "host",
            Self::Token => "token",
            Self::FieldValue => "field-value",
        }
    }

    /// Check if a single unit belongs to this class
    #[inline]
    pub fn contains<U: CodeUnit>(self, unit: U) -> bool {
        self.table().contains_unit(unit)
    }

    /// Position of the leftmost unit outside this class, `None` if all are valid
    #[inline]
    pub fn index_of_invalid<I: ScanInput + ?Sized>(self, input: &I) -> Option<usize> {
        index_of_invalid(self.table(), input.units())
    }

    /// Check if every unit of `input` belongs to this class
    #[inline]
    pub fn is_valid<I: ScanInput + ?Sized>(self, input: &I) -> bool {
        self.index_of_invalid(input).is_none()
    }

    /// Like `index_of_invalid`, but as a `Result` for `?` propagation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCharError` describing the leftmost unit outside the class.
    pub fn validate<I: ScanInput + ?Sized>(self, input: &I) -> Result<()> {
        let units = input.units();
        match index_of_invalid(self.table(), units) {
            None => Ok(()),
            Some(position) => Err(InvalidCharError {
                class: self,
                position,
                unit: units[position].value(),
                is_byte: <I::Unit as CodeUnit>::IS_BYTE,
            }),
        }
    }
}

impl core::fmt::Display for CharClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
