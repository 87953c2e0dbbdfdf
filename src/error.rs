use crate::character_sets::CharClass;

/// A unit outside its character class, found while validating input.
///
/// The `index_of_invalid_*` scans report the same condition as a plain
/// `Option<usize>`; this type is only produced by the `validate_*` wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharError {
    /// Class the input was checked against
    pub class: CharClass,
    /// Zero-based index of the offending unit (byte offset for `str`)
    pub position: usize,
    /// Value of the offending unit
    pub unit: u32,
    /// The input was scanned as bytes, so `unit` is a raw byte value
    pub is_byte: bool,
}

impl InvalidCharError {
    /// Shift the reported position by `offset`, for errors found in a
    /// sub-slice of a larger input
    pub(crate) fn offset_by(mut self, offset: usize) -> Self {
        self.position += offset;
        self
    }
}

/// Renders a unit without leaking control bytes into log lines.
/// Bytes use `%XX`; wider units use `U+XXXX`.
struct DisplayUnit {
    unit: u32,
    is_byte: bool,
}

impl core::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match u8::try_from(self.unit) {
            Ok(b) if b.is_ascii_graphic() => write!(f, "'{}'", char::from(b)),
            Ok(b) if self.is_byte => f.write_str(percent_encoding::percent_encode_byte(b)),
            _ => write!(f, "U+{:04X}", self.unit),
        }
    }
}

impl core::fmt::Display for InvalidCharError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "invalid {} character {} at position {}",
            self.class,
            DisplayUnit {
                unit: self.unit,
                is_byte: self.is_byte,
            },
            self.position
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharError {}

/// Result type for validation operations
pub type Result<T> = core::result::Result<T, InvalidCharError>;
