/// A single element of a scanned sequence: a byte, a UTF-16 code unit,
/// or a decoded scalar value.
pub trait CodeUnit: Copy {
    /// Unit is a raw byte rather than a wider code unit or scalar value
    const IS_BYTE: bool = false;

    /// Numeric value of the unit, used for diagnostics
    fn value(self) -> u32;

    /// The unit as an ASCII byte, or `None` for anything >= 0x80
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        let v = self.value();
        if v < 0x80 { Some(v as u8) } else { None }
    }
}

impl CodeUnit for u8 {
    const IS_BYTE: bool = true;

    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn value(self) -> u32 {
        self
    }
}

impl CodeUnit for char {
    #[inline]
    fn value(self) -> u32 {
        u32::from(self)
    }
}

/// A borrowed sequence that can be scanned against a character class.
///
/// `str` is scanned as its UTF-8 bytes, so reported positions are byte
/// offsets and any non-ASCII character fails at its first byte.
pub trait ScanInput {
    type Unit: CodeUnit;

    fn units(&self) -> &[Self::Unit];
}

impl ScanInput for str {
    type Unit = u8;

    #[inline]
    fn units(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: CodeUnit> ScanInput for [T] {
    type Unit = T;

    #[inline]
    fn units(&self) -> &[T] {
        self
    }
}

impl<T: CodeUnit, const N: usize> ScanInput for [T; N] {
    type Unit = T;

    #[inline]
    fn units(&self) -> &[T] {
        self
    }
}

#[cfg(feature = "std")]
impl ScanInput for String {
    type Unit = u8;

    #[inline]
    fn units(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "std")]
impl<T: CodeUnit> ScanInput for Vec<T> {
    type Unit = T;

    #[inline]
    fn units(&self) -> &[T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii_boundary() {
        assert_eq!(0x7Fu8.to_ascii(), Some(0x7F));
        assert_eq!(0x80u8.to_ascii(), None);
        assert_eq!(0x7Fu16.to_ascii(), Some(0x7F));
        assert_eq!(0x0180u16.to_ascii(), None);
        assert_eq!(0x0000_0141u32.to_ascii(), None);
        assert_eq!('a'.to_ascii(), Some(b'a'));
        assert_eq!('€'.to_ascii(), None);
    }

    #[test]
    fn test_only_bytes_are_bytes() {
        assert!(<u8 as CodeUnit>::IS_BYTE);
        assert!(!<u16 as CodeUnit>::IS_BYTE);
        assert!(!<u32 as CodeUnit>::IS_BYTE);
        assert!(!<char as CodeUnit>::IS_BYTE);
    }

    #[test]
    fn test_wide_units_do_not_truncate() {
        // 0x0141 would alias to 'A' if narrowed to a byte
        assert_eq!(0x0141u16.to_ascii(), None);
        assert_eq!(0x0141u16.value(), 0x0141);
    }

    #[test]
    fn test_str_units_are_bytes() {
        assert_eq!("héllo".units().len(), 6);
        assert_eq!(String::from("abc").units(), b"abc");
        assert_eq!(vec!['a', 'b'].units(), &['a', 'b']);
        assert_eq!([1u16, 2].units(), &[1, 2]);
    }
}
