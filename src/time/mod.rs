//! Timestamp extraction, parsing and timezone normalization.
pub mod error;
pub mod filename_parsing;
pub mod parsing;
pub mod zone;
