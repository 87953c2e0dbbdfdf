/// Authority decomposition between the authority and host scans.
/// Only slices the input; IPv6 structure and port ranges are not checked,
/// but no input byte is dropped: whatever does not fit the layout is
/// reported back in `AuthorityParts`.
use crate::character_sets::CharClass;
use crate::error::{InvalidCharError, Result};

/// Borrowed pieces of an authority (`[userinfo@]host[:port]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorityParts<'a> {
    /// Everything before the last `@`
    pub userinfo: Option<&'a [u8]>,
    /// Host name, or the literal between the brackets for `[...]` hosts
    pub host: &'a [u8],
    /// Digits after the port separator (may be empty, e.g. `host:`)
    pub port: Option<&'a [u8]>,
    /// Bytes after a closing `]` that are not a `:port` suffix
    pub trailing: Option<&'a [u8]>,
    /// Host was written as a bracketed IP literal
    pub is_ip_literal: bool,
    /// A `[` was opened but never closed
    pub is_unterminated: bool,
    /// Offset of `host` within the original input
    pub host_start: usize,
}

impl AuthorityParts<'_> {
    /// Offset of the first byte of `trailing` within the original input
    fn trailing_start(&self) -> usize {
        // host is followed by the closing ']'
        self.host_start + self.host.len() + 1
    }
}

/// Split an authority into userinfo, host and port.
///
/// Examples:
/// - `user:pass@example.com:8080` -> userinfo `user:pass`, host `example.com`, port `8080`
/// - `[::1]:443` -> host `::1` (IP literal), port `443`
/// - `[::1]x` -> host `::1`, trailing `x`
/// - `[fe80::` -> unterminated literal, host is the remainder after `[`
pub fn split_authority(input: &[u8]) -> AuthorityParts<'_> {
    // userinfo may itself contain ':' so it is cut off first
    let (userinfo, host_start) = match memchr::memrchr(b'@', input) {
        Some(at) => (Some(&input[..at]), at + 1),
        None => (None, 0),
    };
    let rest = &input[host_start..];

    if let Some(literal) = rest.strip_prefix(b"[") {
        let Some(close) = memchr::memchr(b']', literal) else {
            return AuthorityParts {
                userinfo,
                host: literal,
                is_ip_literal: true,
                is_unterminated: true,
                host_start: host_start + 1,
                ..AuthorityParts::default()
            };
        };
        let after = &literal[close + 1..];
        let (port, trailing) = match after.strip_prefix(b":") {
            Some(port) => (Some(port), None),
            None if after.is_empty() => (None, None),
            None => (None, Some(after)),
        };
        return AuthorityParts {
            userinfo,
            host: &literal[..close],
            port,
            trailing,
            is_ip_literal: true,
            is_unterminated: false,
            host_start: host_start + 1,
        };
    }

    let (host, port) = match memchr::memrchr(b':', rest) {
        Some(colon) => (&rest[..colon], Some(&rest[colon + 1..])),
        None => (rest, None),
    };

    AuthorityParts {
        userinfo,
        host,
        port,
        host_start,
        ..AuthorityParts::default()
    }
}

/// Check an authority with the authority class, then its host with the
/// host class (skipped for IP literals, whose `:` the host class rejects).
///
/// An unclosed `[` is reported at the `[`; bytes after `]` other than a
/// `:port` suffix are reported at their first byte.
/// Error positions are relative to `input`.
///
/// # Errors
///
/// Returns the first invalid character found by either scan, or the
/// misplaced byte around a bracketed literal.
pub fn check_authority(input: &[u8]) -> Result<AuthorityParts<'_>> {
    CharClass::Authority.validate(input)?;

    let parts = split_authority(input);
    let misplaced = |position: usize, unit: u8| InvalidCharError {
        class: CharClass::Authority,
        position,
        unit: u32::from(unit),
        is_byte: true,
    };

    if parts.is_unterminated {
        return Err(misplaced(parts.host_start - 1, b'['));
    }
    if let Some(&first) = parts.trailing.and_then(<[u8]>::first) {
        return Err(misplaced(parts.trailing_start(), first));
    }
    if !parts.is_ip_literal {
        CharClass::Host
            .validate(parts.host)
            .map_err(|e| e.offset_by(parts.host_start))?;
    }

    Ok(parts)
}
