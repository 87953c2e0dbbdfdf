#![cfg_attr(not(feature = "std"), no_std)]

// Internal modules (not public API)
mod authority;
mod character_sets;
mod checkers;
mod error;
mod input;

// Public API
pub use authority::{AuthorityParts, check_authority, split_authority};
pub use character_sets::{
    AUTHORITY, CharClass, CharTable, FIELD_VALUE, HOST, TABLE_SIZE, TOKEN,
};
pub use checkers::{
    contains_invalid_authority_char, index_of_invalid_authority_char,
    index_of_invalid_field_value_char, index_of_invalid_host_char, index_of_invalid_token_char,
    validate_authority, validate_field_value, validate_host, validate_token,
};
pub use error::InvalidCharError;
pub use input::{CodeUnit, ScanInput};

pub type Result<T> = core::result::Result<T, InvalidCharError>;
