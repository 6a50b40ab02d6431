//! Utility modules

pub mod text;

pub use text::{collate, contains_ignore_case, parse_leading_float};
